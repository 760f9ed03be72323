mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, dispatch, validate};
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialise logging: {err:#}");
        return ExitCode::FAILURE;
    }

    let cfg = commands.to_config();

    let result = match commands.command {
        Commands::Dispatch { .. } => {
            print::header("planning trips", cfg.quiet);
            dispatch::dispatch(&cfg)
        }
        Commands::Validate { .. } => {
            print::header("checking manifest", cfg.quiet);
            validate::validate(&cfg)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: logging::FATAL_TARGET, "{err:#}");
            ExitCode::FAILURE
        }
    }
}
