mod category;
mod cli;
mod commands;
mod config;
mod error;
mod model;
mod source;
mod store;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::RunStatus;

fn main() {
    init_tracing();

    match run() {
        Ok(RunStatus::Clean) => {}
        Ok(RunStatus::CompletedWithErrors) => std::process::exit(1),
        Err(err) => {
            error!(error = %err, "command failed");
            for cause in err.chain().skip(1) {
                error!(cause = %cause, "caused by");
            }
            std::process::exit(1);
        }
    }
}

fn run() -> Result<RunStatus> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import(args) => commands::import::run(args),
        Commands::Status(args) => commands::status::run(args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
