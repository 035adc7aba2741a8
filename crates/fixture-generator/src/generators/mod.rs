//! Entity generators.
//!
//! Each generator is a pure function of an RNG, the run's fixed vocabulary
//! and whatever upstream entities it references. None of them perform I/O.

pub mod catalog;
pub mod install;
pub mod listing;
pub mod text;
pub mod timestamp;
pub mod uuid;
pub mod version;

pub use catalog::{generate_category, generate_market};
pub use install::generate_install;
pub use listing::generate_listing;
pub use uuid::generate_uuid_v4;
pub use version::generate_version;

/// URL used for categories and markets.
pub const CATALOG_URL: &str = "https://www.eclipse.org";
