//! Command dispatch: bridges CLI args -> model visitors -> output formatting.

pub mod config_cmd;
pub mod convert;
pub mod describe;
pub mod objects;
pub mod params;
pub mod template;
pub mod util;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a command that needs resolved settings to its handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Objects(args) => objects::handle(&args, settings),
        Command::Describe(args) => describe::handle(&args, settings),
        Command::Template(args) => template::handle(&args, settings),
        Command::Params(args) => params::handle(&args, settings),
        Command::Convert(args) => convert::handle(&args, settings),
        // Config and completions are handled before settings are loaded
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
