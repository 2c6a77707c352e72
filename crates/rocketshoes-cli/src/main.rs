//! RocketShoes CLI - command-line shopping cart
//!
//! Provides commands for:
//! - Showing the saved cart
//! - Adding, removing and re-quantifying products
//! - Viewing and validating configuration

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rocketshoes_core::config::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod notifier;
mod output;

use commands::{
    cart::{AddCommand, RemoveCommand, ShowCommand, UpdateCommand},
    config::ConfigCommand,
    CliContext,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about = "RocketShoes shopping cart")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the cart
    Show(ShowCommand),
    /// Add one unit of a product
    Add(AddCommand),
    /// Remove a product from the cart
    Remove(RemoveCommand),
    /// Set the amount of a product in the cart
    Update(UpdateCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Picks the log filter: `RUST_LOG` wins, then `-v`, then the configured level
fn env_filter(verbose: u8, configured: &str) -> EnvFilter {
    let fallback = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let level = Config::load_or_default(&config_path).logging.level;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose, &level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = CliContext {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        },
        quiet: cli.quiet,
        config_path,
    };

    match &cli.command {
        Commands::Show(cmd) => cmd.execute(&ctx).await,
        Commands::Add(cmd) => cmd.execute(&ctx).await,
        Commands::Remove(cmd) => cmd.execute(&ctx).await,
        Commands::Update(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx).await,
    }
}
