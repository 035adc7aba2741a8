//! Command-line interface for marketplace-seed
//!
//! # Usage Examples
//!
//! ## Seeding fixtures
//! ```bash
//! # 1000 listings, up to 5 installs each, 25 listings in flight at a time
//! marketplace-seed seed --server http://localhost:8090 --installs 5
//!
//! # Small reproducible run
//! marketplace-seed seed -s http://localhost:8090 -c 3 -i 2 -b 1 --seed 42
//! ```
//!
//! ## Hammering a read endpoint
//! ```bash
//! marketplace-seed hammer --server http://localhost:8090 --count 500
//! ```
//!
//! Logging is controlled with `RUST_LOG` (defaults to `info`).

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fixture_populate::{FixtureScheduler, SeedArgs, SeedConfig};
use loadtest_hammer::{HammerArgs, HammerConfig};
use marketplace_client::HttpTransport;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marketplace-seed")]
#[command(about = "Seed a marketplace catalog API with fixtures and load-test its read endpoints")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create categories, listings, versions, installs and markets in dependency order
    Seed {
        #[command(flatten)]
        args: SeedArgs,

        /// Summary output format
        #[arg(long, value_enum, default_value = "table")]
        output_format: OutputFormat,
    },

    /// Fire concurrent reads at one endpoint and count unique/duplicate IDs
    Hammer {
        #[command(flatten)]
        args: HammerArgs,

        /// Summary output format
        #[arg(long, value_enum, default_value = "table")]
        output_format: OutputFormat,
    },
}

/// Output format for run summaries.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed {
            args,
            output_format,
        } => run_seed(args, output_format).await?,
        Commands::Hammer {
            args,
            output_format,
        } => run_hammer(args, output_format).await?,
    }

    Ok(())
}

async fn run_seed(args: SeedArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = SeedConfig::from_args(&args).context("Invalid seed configuration")?;
    let transport = HttpTransport::new(&fixture_populate::config::client_config(&args))
        .context("Failed to create HTTP client")?;

    tracing::info!("Seeding fixtures into {}", transport.base_url());
    let mut scheduler = FixtureScheduler::new(transport, config);
    let report = scheduler.run().await.context("Seeding aborted")?;

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => println!("{}", fixture_populate::format_table(&report)),
    }
    Ok(())
}

async fn run_hammer(args: HammerArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let transport =
        HttpTransport::new(&args.client_config()).context("Failed to create HTTP client")?;
    let config = HammerConfig {
        path: args.path.clone(),
        count: args.count,
    };

    let report = loadtest_hammer::run_hammer(Arc::new(transport), &config).await;

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => println!("{}", loadtest_hammer::format_table(&report)),
    }
    Ok(())
}
