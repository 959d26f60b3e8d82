//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command and maps the
//! [`commands::CommandResult`] to an [`ExitStatus`].

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_code;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
