//! Slipway CLI - build-configuration orchestrator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Configure(args) => commands::configure::execute(args, cli.verbose, !cli.no_color),
        Commands::Layout(args) => commands::layout::execute(args),
        Commands::Requirements(args) => commands::requirements::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
