//! cargo2port CLI
//!
//! Usage: cargo2port [OPTIONS] [LOCKFILE]

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cargo2port::cli::Cli;
use cargo2port::{run_file, Cargo2PortError};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "CARGO2PORT_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Cargo2PortError>() {
            // Unreadable input is reported like any other argument error.
            Some(Cargo2PortError::Io { .. }) => Cli::command()
                .error(ErrorKind::Io, err.to_string())
                .exit(),
            Some(app_err) => {
                eprintln!("{app_err}");
                ExitCode::from(app_err.exit_code())
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn generate(cli: &Cli) -> Result<()> {
    let config = cli.stanza_config(|key| std::env::var(key).ok());
    tracing::debug!(?config, lockfile = %cli.lockfile.display(), "generating stanza");

    let output = run_file(&cli.lockfile, &config, cli.output_mode())?;
    println!("{output}");
    Ok(())
}
