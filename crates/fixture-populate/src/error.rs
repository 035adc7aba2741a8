//! Error types for fixture seeding.

use fixture_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a seeding run.
///
/// Transport failures are deliberately absent: they are recorded in the
/// [`SeedReport`](crate::SeedReport) and the run carries on.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// The generator hit a contract violation (bad vocabulary, dangling reference).
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The run configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
