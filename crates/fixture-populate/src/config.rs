//! Validated run configuration.

use crate::args::SeedArgs;
use crate::error::PopulateError;
use fixture_generator::Vocabulary;
use marketplace_client::ClientConfig;
use std::time::Duration;

/// Settings for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub listing_count: u64,
    pub max_installs: u32,
    pub batch_size: usize,
    pub max_versions: u32,
    pub category_count: usize,
    pub market_count: usize,
    pub seed: Option<u64>,
    pub vocabulary: Vocabulary,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            listing_count: 1000,
            max_installs: 0,
            batch_size: 25,
            max_versions: 5,
            category_count: 200,
            market_count: 5,
            seed: None,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl SeedConfig {
    /// Build a configuration from CLI arguments, loading the vocabulary file if given.
    pub fn from_args(args: &SeedArgs) -> Result<Self, PopulateError> {
        let vocabulary = match &args.vocabulary {
            Some(path) => Vocabulary::from_file(path)?,
            None => Vocabulary::default(),
        };

        let config = Self {
            listing_count: args.count,
            max_installs: args.installs,
            batch_size: args.batch,
            max_versions: args.max_versions,
            category_count: args.categories,
            market_count: args.markets,
            seed: args.seed,
            vocabulary,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PopulateError> {
        if self.batch_size == 0 {
            return Err(PopulateError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if self.max_versions == 0 {
            return Err(PopulateError::InvalidConfig(
                "max versions must be at least 1".to_string(),
            ));
        }
        self.vocabulary.validate()?;
        Ok(())
    }
}

/// Transport settings derived from the seed arguments.
pub fn client_config(args: &SeedArgs) -> ClientConfig {
    ClientConfig::new(args.server.clone()).with_timeout(Duration::from_millis(args.timeout_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        seed: SeedArgs,
    }

    fn parse(args: &[&str]) -> SeedArgs {
        let mut argv = vec!["seed"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).seed
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--server", "http://localhost:8090"]);
        let config = SeedConfig::from_args(&args).unwrap();

        assert_eq!(config.listing_count, 1000);
        assert_eq!(config.max_installs, 0);
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.category_count, 200);
        assert_eq!(config.market_count, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-c", "3", "-i", "2", "-b", "1", "-s", "http://x"]);
        let config = SeedConfig::from_args(&args).unwrap();

        assert_eq!(config.listing_count, 3);
        assert_eq!(config.max_installs, 2);
        assert_eq!(config.batch_size, 1);
        assert_eq!(args.server, "http://x");
    }

    #[test]
    fn test_zero_batch_rejected() {
        let args = parse(&["-s", "http://x", "--batch", "0"]);
        let result = SeedConfig::from_args(&args);
        assert!(matches!(result, Err(PopulateError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_vocabulary_file() {
        let args = parse(&["-s", "http://x", "--vocabulary", "/nonexistent/vocab.yaml"]);
        let result = SeedConfig::from_args(&args);
        assert!(matches!(result, Err(PopulateError::Generator(_))));
    }

    #[test]
    fn test_client_config_timeout() {
        let args = parse(&["-s", "http://x", "--timeout-ms", "100"]);
        let client = client_config(&args);
        assert_eq!(client.timeout, Duration::from_millis(100));
        assert_eq!(client.server, "http://x");
    }
}
