//! faultdemo -- runs every fault scenario once and prints one line per scenario.

mod cli;
mod error;
mod logging;
mod output;
mod run;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::OutputWriter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn try_main(cli: Cli) -> Result<(), CliError> {
    let config = run::resolve_config(&cli)?;

    logging::init_tracing(&config.general).map_err(|e| CliError::Command(e.to_string()))?;

    tracing::info!(
        config = ?cli.config,
        repeat = cli.repeat,
        "faultdemo starting"
    );

    let writer = OutputWriter::new(cli.output);
    run::execute(&config, cli.repeat, &writer);
    Ok(())
}
