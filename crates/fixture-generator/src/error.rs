//! Error types for fixture generation.

/// Error type for generator operations.
///
/// These are contract violations inside the generator (a corrupted
/// vocabulary, a reference to an entity that was never generated), not
/// transient conditions, so callers are expected to fail the run on them.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Sampling was asked for a non-empty result from an empty domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A generator referenced an upstream value that does not exist
    #[error("Unknown {kind} reference: '{value}'")]
    UnknownReference { kind: &'static str, value: String },

    /// A listing tried to register against markets that were already persisted
    #[error("Market registry is sealed; listing '{listing_id}' registered too late")]
    RegistrySealed { listing_id: String },

    /// Vocabulary file could not be read
    #[error("Failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Vocabulary file could not be parsed
    #[error("Failed to parse vocabulary YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
