//! Reports catalogs whose file-name locale disagrees with `<TS language>`.

use crate::{
    core::{CheckContext, scanner::LoadedCatalog},
    issues::LanguageMismatchIssue,
    utils::normalize_locale,
};

pub fn check_language_mismatch_issues(ctx: &CheckContext) -> Vec<LanguageMismatchIssue> {
    ctx.catalogs
        .iter()
        .filter_map(check_language_mismatch)
        .collect()
}

/// `None` when either side is unknown or both agree (`zh-CN` == `zh_CN`).
pub fn check_language_mismatch(loaded: &LoadedCatalog) -> Option<LanguageMismatchIssue> {
    let file_locale = loaded.locale.as_deref()?;
    let declared = loaded.catalog.language.as_deref()?;

    if normalize_locale(file_locale) == normalize_locale(declared) {
        return None;
    }

    Some(LanguageMismatchIssue {
        file_path: loaded.file_path().to_string(),
        file_locale: file_locale.to_string(),
        declared_language: declared.to_string(),
    })
}
