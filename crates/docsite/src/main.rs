//! docsite CLI - Documentation site builder.
//!
//! Provides commands for:
//! - `check`: Compose the extension pipeline and validate navigation
//! - `nav`: Print the resolved navigation tree as JSON
//! - `pipeline`: Print the composed extension stages

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, PipelineArgs};
use output::Output;

/// docsite - Documentation site builder.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (INFO logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration, pipeline and navigation.
    Check(CheckArgs),
    /// Print the resolved navigation tree as JSON.
    Nav(NavArgs),
    /// Print the composed extension pipeline.
    Pipeline(PipelineArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Pipeline(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
