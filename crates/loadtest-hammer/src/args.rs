//! CLI argument definitions for the hammer command.

use clap::Args;
use marketplace_client::ClientConfig;
use std::time::Duration;

/// Arguments for load-testing a read endpoint.
#[derive(Args, Clone, Debug)]
pub struct HammerArgs {
    /// Number of concurrent requests to issue
    #[arg(long, short = 'c', default_value = "100")]
    pub count: usize,

    /// Server address (e.g. http://localhost:8090)
    #[arg(long, short = 's', env = "MARKETPLACE_SERVER")]
    pub server: String,

    /// Endpoint to read
    #[arg(long, default_value = "/listings")]
    pub path: String,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value = "2500")]
    pub timeout_ms: u64,
}

impl HammerArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server.clone()).with_timeout(Duration::from_millis(self.timeout_ms))
    }
}
