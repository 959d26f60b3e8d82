//! Identical translation detection rule.
//!
//! Detects translations that are identical to their source text, which may
//! indicate that the text was never translated.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, scanner::LoadedCatalog},
    issues::IdenticalIssue,
    rules::helpers::active_entries,
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    ctx.catalogs
        .iter()
        .flat_map(|loaded| check_identical(loaded, &ctx.ignore_texts))
        .collect()
}

/// Check for translations equal to their source text.
///
/// Skipped:
/// - empty translations (reported by the unfinished rule)
/// - texts without alphabetic characters (pure numbers/symbols)
/// - source texts listed in `ignore_texts`
pub fn check_identical(loaded: &LoadedCatalog, ignore_texts: &HashSet<String>) -> Vec<IdenticalIssue> {
    active_entries(loaded)
        .filter(|entry| {
            !entry.translated_text.is_empty()
                && entry.translated_text == entry.source_text
                && contains_alphabetic(&entry.source_text)
                && !ignore_texts.contains(&entry.source_text)
        })
        .map(|entry| IdenticalIssue {
            context: entry.message_context(loaded.file_path()),
            locale: loaded.effective_locale().map(str::to_string),
        })
        .collect()
}
