//! Storefront CLI - browse the PC catalog, run cart sessions, get build advice.
//!
//! Commands:
//! - `storefront catalog` - List, show and administer products
//! - `storefront cart` - Run a cart session from a list of operations
//! - `storefront assistant` - Recommend a PC for a use case and budget
//! - `storefront stats` - Inventory overview
//! - `storefront config` - Manage configuration

mod catalog_file;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AssistantArgs, CartArgs, CatalogArgs, ConfigArgs, StatsArgs};

/// Storefront CLI - catalog, cart and PC builder assistant
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the product catalog
    Catalog(CatalogArgs),

    /// Run a shopping cart session
    Cart(CartArgs),

    /// Get a PC recommendation
    Assistant(AssistantArgs),

    /// Show inventory statistics
    Stats(StatsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing();
    }

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Assistant(args) => commands::assistant::run(args, &ctx).await,
        Commands::Stats(args) => commands::stats::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Debug events from the storefront crates go to stderr; `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("storefront_commerce=debug,storefront_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
