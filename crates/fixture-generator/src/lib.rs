//! Fixture generator for the marketplace seeding tool.
//!
//! This crate builds the JSON payloads for every catalog entity kind
//! (categories, markets, listings, listing versions and installs). All
//! generators are pure: they take an RNG, the fixed [`Vocabulary`] and the
//! upstream entities they reference, and never perform I/O.
//!
//! # Architecture
//!
//! ```text
//!   Vocabulary (defaults or YAML)
//!          │
//!          ▼
//! ┌──────────────────────┐
//! │      RunContext      │
//! │                      │
//! │  - category pool     │
//! │  - market pool       │
//! │  - MarketRegistry    │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   generators::{category, market, listing, version, install}
//!            │
//!            ▼
//!   Category / Market / Listing / ListingVersion / Install
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{generators, RunContext, Vocabulary};
//! use chrono::Utc;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let context = RunContext::allocate(Vocabulary::default(), 20, 5, &mut rng).unwrap();
//!
//! let listing =
//!     generators::generate_listing(&mut rng, &context, "listing-1".to_string(), Utc::now())
//!         .unwrap();
//! let version = generators::generate_version(
//!     &mut rng,
//!     context.vocabulary(),
//!     &listing.id,
//!     "0",
//! )
//! .unwrap();
//! assert_eq!(version.listing_id, listing.id);
//! ```

pub mod context;
pub mod entities;
pub mod error;
pub mod generators;
pub mod registry;
pub mod sampler;
pub mod vocabulary;

// Re-exports for convenience
pub use context::RunContext;
pub use entities::{Author, Category, Install, Listing, ListingVersion, Market, Organization, Tag};
pub use error::GeneratorError;
pub use registry::MarketRegistry;
pub use vocabulary::Vocabulary;
