mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rhtmx")]
#[command(version, about = "RHTMX CLI - Rust + HTMX Framework", long_about = None)]
struct Cli {
    /// Log every classified routes entry
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List layouts, menus and routes found in the routes directory
    Routes {
        #[command(flatten)]
        source: RoutesSource,

        /// Print the route manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fail when the routes directory breaks any routing rule
    Check {
        #[command(flatten)]
        source: RoutesSource,
    },
}

#[derive(Args, Clone)]
pub struct RoutesSource {
    /// Routes directory (overrides routing.routes_dir)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "rhtmx.toml")]
    config: PathBuf,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Routes { source, json } => {
            commands::routes::execute(&source, json)?;
        }
        Commands::Check { source } => {
            commands::check::execute(&source)?;
        }
    }

    Ok(())
}
