//! Editor variable resolver CLI
//!
//! Resolves `${...}` placeholders in a template against a workspace built
//! from flags, the process environment and optional settings files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;
mod shell;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli.command).await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve(args) => commands::run_resolve(args).await,
        Commands::Scan { template, json } => commands::run_scan(&template, json),
        Commands::Tokens => {
            commands::run_tokens();
            Ok(())
        }
    }
}
