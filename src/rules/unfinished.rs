//! Unfinished translation detection rule.
//!
//! Reports entries whose translation is empty or still carries
//! `type="unfinished"`. Vanished and obsolete entries are skipped.

use crate::{
    core::{CheckContext, scanner::LoadedCatalog},
    issues::UnfinishedIssue,
    rules::helpers::active_entries,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.catalogs.iter().flat_map(check_unfinished).collect()
}

pub fn check_unfinished(loaded: &LoadedCatalog) -> Vec<UnfinishedIssue> {
    active_entries(loaded)
        .filter(|entry| entry.is_unfinished())
        .map(|entry| UnfinishedIssue {
            context: entry.message_context(loaded.file_path()),
            source_text: entry.source_text.clone(),
            status: entry.status,
        })
        .collect()
}
