//! gmplot CLI - Google Maps plotting and documentation tooling.
//!
//! Provides commands for:
//! - `text`: Emit the script for a text label on the map
//! - `docs generate`: Generate Sphinx reference stubs and the wiki sidebar
//! - `docs format`: Format built Markdown for the GitHub Wiki

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DocsCommand, TextArgs};
use output::Output;

/// gmplot - Google Maps plotting.
#[derive(Parser)]
#[command(name = "gmplot", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover gmplot.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the script for a text label.
    Text(TextArgs),
    /// Documentation commands.
    #[command(subcommand)]
    Docs(DocsCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Text(args) => args.execute(config_path),
        Commands::Docs(cmd) => cmd.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
