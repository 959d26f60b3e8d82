use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    write_default_config(Path::new(CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created: true }),
        error_count: 0,
        warning_count: 0,
        exit_on_errors: true,
        issues: Vec::new(),
        parse_error_count: 0,
        files_checked: 0,
    })
}

/// Write the default config to `path`, refusing to overwrite.
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, default_config_json()?)?;
    Ok(())
}
