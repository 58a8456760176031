//! treeform CLI
//!
//! Renders server-driven UI documents into platform-neutral view trees.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_check, run_inspect, run_render};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(failed) => {
            if failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` when the document failed to convert.
fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Render {
            file,
            format,
            mode,
            max_depth,
            placeholders,
        } => run_render(&cli, file, *format, *mode, *max_depth, *placeholders),
        Commands::Check { file } => run_check(&cli, file),
        Commands::Inspect { file, format } => run_inspect(file, *format).map(|_| false),
    }
}
