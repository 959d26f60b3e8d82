//! A catalog covers one policy namespace; entries from another one usually
//! mean a copy-paste from a different policy's catalog.

use crate::{
    core::{CheckContext, scanner::LoadedCatalog},
    issues::MixedNamespaceIssue,
};

pub fn check_mixed_namespace_issues(ctx: &CheckContext) -> Vec<MixedNamespaceIssue> {
    ctx.catalogs.iter().flat_map(check_mixed_namespace).collect()
}

/// Report entries whose namespace differs from the catalog's first entry.
pub fn check_mixed_namespace(loaded: &LoadedCatalog) -> Vec<MixedNamespaceIssue> {
    let Some(expected) = loaded.catalog.namespaces().first().map(|ns| ns.to_string()) else {
        return Vec::new();
    };

    loaded
        .catalog
        .entries()
        .filter(|entry| entry.key.namespace() != expected)
        .map(|entry| MixedNamespaceIssue {
            context: entry.message_context(loaded.file_path()),
            namespace: entry.key.namespace().to_string(),
            expected_namespace: expected.clone(),
        })
        .collect()
}
