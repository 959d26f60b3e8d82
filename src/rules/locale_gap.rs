//! Locale gap detection rule.
//!
//! Catalogs in the same directory translate the same policy file into
//! different locales. A key defined in one of them should exist in all.
//!
//! Output format:
//! - Points to the first catalog (by path) that defines the key
//! - Lists the locales where the key is missing

use std::collections::BTreeSet;

use crate::{
    core::{CheckContext, MessageKey, scanner::LoadedCatalog},
    issues::LocaleGapIssue,
};

pub fn check_locale_gap_issues(ctx: &CheckContext) -> Vec<LocaleGapIssue> {
    ctx.groups()
        .values()
        .flat_map(|group| check_locale_gaps(group))
        .collect()
}

/// Check one group of sibling catalogs (sorted by path).
pub fn check_locale_gaps(group: &[&LoadedCatalog]) -> Vec<LocaleGapIssue> {
    if group.len() < 2 {
        return Vec::new();
    }

    let all_keys: BTreeSet<&MessageKey> = group
        .iter()
        .flat_map(|loaded| loaded.catalog.entries().map(|e| &e.key))
        .collect();

    let mut issues = Vec::new();
    for key in all_keys {
        let mut missing_in: Vec<String> = group
            .iter()
            .filter(|loaded| !loaded.catalog.contains_key(key))
            .map(|loaded| catalog_label(loaded))
            .collect();

        if missing_in.is_empty() {
            continue;
        }
        missing_in.sort();

        let Some((owner, entry)) = group
            .iter()
            .find_map(|loaded| loaded.catalog.get(key).map(|entry| (loaded, entry)))
        else {
            continue;
        };

        issues.push(LocaleGapIssue {
            context: entry.message_context(owner.file_path()),
            missing_in,
        });
    }

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
    });

    issues
}

/// Locale of a catalog for display, falling back to its path.
fn catalog_label(loaded: &LoadedCatalog) -> String {
    loaded
        .effective_locale()
        .map(str::to_string)
        .unwrap_or_else(|| loaded.file_path().to_string())
}
