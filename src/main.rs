//! Binary entry point for degrees.

use anyhow::Context;
use clap::Parser;
use degrees::cli::{self, Cli};
use degrees::observability::{self, LoggingConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let logging = LoggingConfig::from_env(cli.verbose, cli.log_format);
    observability::init(&logging).context("failed to initialize logging")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(cli, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
