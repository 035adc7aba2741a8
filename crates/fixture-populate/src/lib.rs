//! Dependency-ordered fixture seeding.
//!
//! The [`FixtureScheduler`] drives a seeding run through its stages:
//!
//! ```text
//! INIT → CATEGORIES → MARKETS_REGISTERED → LISTINGS ─┬─ VERSIONS (per listing, sequential)
//!                                                     └─ INSTALLS (per listing, after versions)
//!      → MARKETS_PERSISTED → DONE
//! ```
//!
//! Listings are processed in batches; a batch settles completely before the
//! next one starts, which bounds the number of in-flight requests. Markets are
//! written last so that their listing references are complete.
//!
//! # Example
//!
//! ```ignore
//! use fixture_populate::{FixtureScheduler, SeedConfig};
//! use marketplace_client::{ClientConfig, HttpTransport};
//!
//! let transport = HttpTransport::new(&ClientConfig::new("http://localhost:8090"))?;
//! let mut scheduler = FixtureScheduler::new(transport, SeedConfig::default());
//! let report = scheduler.run().await?;
//! println!("{}", fixture_populate::format_table(&report));
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod scheduler;
pub mod stage;

pub use args::SeedArgs;
pub use config::SeedConfig;
pub use error::PopulateError;
pub use report::{format_table, CreationFailure, EntityKind, KindCounts, SeedReport, Tally};
pub use scheduler::FixtureScheduler;
pub use stage::Stage;
