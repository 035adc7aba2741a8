//! CLI argument definitions for the seed command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for seeding a catalog server with fixtures.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Number of listings to generate
    #[arg(long, short = 'c', default_value = "1000")]
    pub count: u64,

    /// Maximum number of installs to generate per listing
    #[arg(long, short = 'i', default_value = "0")]
    pub installs: u32,

    /// Number of listings processed concurrently
    #[arg(long, short = 'b', default_value = "25")]
    pub batch: usize,

    /// Server address (e.g. http://localhost:8090)
    #[arg(long, short = 's', env = "MARKETPLACE_SERVER")]
    pub server: String,

    /// Random seed for reproducible fixtures (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of versions per listing (at least one is always created)
    #[arg(long, default_value = "5")]
    pub max_versions: u32,

    /// Size of the category pool
    #[arg(long, default_value = "200")]
    pub categories: usize,

    /// Size of the market pool
    #[arg(long, default_value = "5")]
    pub markets: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value = "2500")]
    pub timeout_ms: u64,

    /// YAML file overriding the platform/version/license vocabularies
    #[arg(long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,
}
