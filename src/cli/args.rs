//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate catalogs (pairing, unfinished, identical, locale gaps, ...)
//! - `lookup`: Resolve an action and field to its localized strings
//! - `dump`: Print a catalog's key -> translation mapping as JSON
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::core::Field;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Dump(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the catalogs directory.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Catalogs directory path (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog files or directories to check (default: catalogs root)
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    /// Can be specified multiple times: --rule unfinished --rule identical
    #[arg(long = "rule", value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Full key (`<action-id>!<field>`) or an action id combined with --field
    pub key: String,

    /// Field to resolve when KEY is an action id
    #[arg(long, value_enum)]
    pub field: Option<Field>,

    /// Only print the translation for this locale
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Catalog file to print
    pub file: PathBuf,

    /// Include the source text next to each translation
    #[arg(long)]
    pub with_source: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (incomplete pairs, unfinished or identical translations, locale gaps)
    Check(CheckCommand),
    /// Print the localized strings of one action
    Lookup(LookupCommand),
    /// Print a catalog as a JSON object of key to translation
    Dump(DumpCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
