//! Binary crate for the `geocode` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup (stderr, silent unless `RUST_LOG` is set)
//! - Printing exactly one JSON line per run

use std::process::ExitCode;

use clap::Parser;

mod cli;

/// Logger reading its filter from `filter_var`, off when that variable is unset.
fn logger(filter_var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(filter_var, "off"))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logger(env_logger::DEFAULT_FILTER_ENV).init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
