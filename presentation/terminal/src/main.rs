use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;
mod views;

use config::app_config::AppConfig;
use config::storage_config::StorageConfig;
use setup::{dependency_injection::DependencyContainer, shell::Shell};

/// GO FARM: a farm-to-consumer marketplace in your terminal.
#[derive(Parser, Debug)]
#[command(name = "go-farm", version, about)]
struct Cli {
    /// SQLite connection string, overrides GOFARM_DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,

    /// Keep everything in memory for this run only
    #[arg(long, conflicts_with = "database_url")]
    ephemeral: bool,

    /// Start with an empty catalogue instead of the demo products
    #[arg(long)]
    no_seed: bool,
}

/// Terminal Entry Point
///
/// Initializes the application, wires dependencies, and runs the shell.
/// - config/: Application configuration (storage, checkout)
/// - setup/: Dependency injection and the interactive shell
/// - views/: Text rendering of each screen
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration, command line wins over environment
    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(url) = cli.database_url {
        config.storage = StorageConfig::Sqlite { url };
    }
    if cli.ephemeral {
        config.storage = StorageConfig::Memory;
    }
    if cli.no_seed {
        config.seed_demo_products = false;
    }
    tracing::info!("Using storage: {}", config.storage.describe());

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Run shell on stdin/stdout
    Shell::new(container)
        .await
        .run(tokio::io::stdin(), tokio::io::stdout())
        .await?;

    Ok(())
}
