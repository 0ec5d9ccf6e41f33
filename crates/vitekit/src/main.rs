//! vitekit - Scaffold a Vite + React + Redux Toolkit front-end project
//!
//! This is the main entry point for the vitekit command-line interface.

mod cli;
mod output;
mod scaffold;

use std::process::ExitCode;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vitekit_scaffold::SystemRunner;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(e),
    };

    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Help and version exit 0; every other argument error exits 1
fn parse_failure(e: clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let base_dir = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    scaffold::run(cli.scaffold, &base_dir, &SystemRunner::new()).await
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
