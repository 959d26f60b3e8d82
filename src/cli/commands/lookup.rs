use anyhow::{Result, bail};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupMatch, LookupSummary};
use crate::{
    core::{CheckContext, FIELD_SEPARATOR, Field, MessageKey, is_valid_action_id},
    utils::normalize_locale,
};

/// Resolve one key in every catalog under the catalogs root.
///
/// A missing translation is not an internal error: the result carries one
/// error so the CLI exits with a failure status.
pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let key = resolve_key(&cmd.key, cmd.field)?;
    let ctx = CheckContext::new(&cmd.common, &[])?;
    let matches = find_matches(&ctx, &key, cmd.locale.as_deref());

    let error_count = usize::from(matches.is_empty());

    Ok(CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            key: key.to_string(),
            locale: cmd.locale,
            matches,
        }),
        error_count,
        warning_count: 0,
        exit_on_errors: true,
        issues: Vec::new(),
        parse_error_count: ctx.warnings.len(),
        files_checked: ctx.files_checked(),
    })
}

/// Build the key from either `<action-id>!<field>` or a bare action id.
pub fn resolve_key(input: &str, field: Option<Field>) -> Result<MessageKey> {
    let input = input.trim();

    if input.contains(FIELD_SEPARATOR) {
        let key: MessageKey = match input.parse() {
            Ok(key) => key,
            Err(err) => bail!("Invalid key \"{}\": {}", input, err),
        };
        if let Some(field) = field
            && field != key.field
        {
            bail!(
                "Key \"{}\" names the {} field, but --field {} was given",
                input,
                key.field,
                field
            );
        }
        return Ok(key);
    }

    if !is_valid_action_id(input) {
        bail!("Invalid action id \"{}\"", input);
    }

    Ok(MessageKey::new(input, field.unwrap_or(Field::Message)))
}

/// Translations of `key` in catalog path order, optionally for one locale.
pub fn find_matches(ctx: &CheckContext, key: &MessageKey, locale: Option<&str>) -> Vec<LookupMatch> {
    let wanted = locale.map(normalize_locale);

    ctx.catalogs
        .iter()
        .filter(|loaded| match &wanted {
            Some(wanted) => loaded
                .effective_locale()
                .is_some_and(|l| normalize_locale(l) == *wanted),
            None => true,
        })
        .filter_map(|loaded| {
            let text = loaded.catalog.resolve(&key.action_id, key.field)?;
            Some(LookupMatch {
                locale: loaded.effective_locale().unwrap_or("-").to_string(),
                file_path: loaded.file_path().to_string(),
                text: text.to_string(),
            })
        })
        .collect()
}
