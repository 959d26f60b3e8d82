use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::super::args::DumpCommand;
use super::{CommandResult, CommandSummary, DumpSummary};
use crate::core::{Catalog, parse_catalog_file};

#[derive(Debug, Serialize)]
struct DumpEntry<'a> {
    source: &'a str,
    translation: &'a str,
}

pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let catalog = parse_catalog_file(&cmd.file)
        .with_context(|| format!("Failed to load {}", cmd.file.display()))?;

    let json = serde_json::to_string_pretty(&catalog_to_json(&catalog, cmd.with_source)?)?;

    Ok(CommandResult {
        summary: CommandSummary::Dump(DumpSummary { json }),
        error_count: 0,
        warning_count: 0,
        exit_on_errors: true,
        issues: Vec::new(),
        parse_error_count: 0,
        files_checked: 1,
    })
}

/// Key -> translation object in document order.
///
/// With `with_source`, each value is `{ "source": ..., "translation": ... }`.
pub fn catalog_to_json(catalog: &Catalog, with_source: bool) -> Result<Value> {
    let mut map = Map::new();

    for entry in catalog.entries() {
        let value = if with_source {
            serde_json::to_value(DumpEntry {
                source: &entry.source_text,
                translation: &entry.translated_text,
            })?
        } else {
            Value::String(entry.translated_text.clone())
        };
        map.insert(entry.key.to_string(), value);
    }

    Ok(Value::Object(map))
}
