//! Transport adapter for the marketplace catalog API.
//!
//! This crate defines the `Transport` trait that the seeding scheduler and the
//! load harness are written against, and `HttpTransport`, the reqwest-backed
//! implementation used by the CLI. Tests substitute in-memory transports.

mod error;
mod http;
mod traits;

pub use error::TransportError;
pub use http::{ClientConfig, HttpTransport, DEFAULT_TIMEOUT, USER_AGENT};
pub use traits::{Transport, WriteMethod};
