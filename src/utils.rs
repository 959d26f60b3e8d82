//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tscat::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("認証"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Normalizes a locale tag for comparison: `zh-CN`, `zh_cn` and `zh_CN` are equal.
///
/// ```
/// use tscat::utils::normalize_locale;
///
/// assert_eq!(normalize_locale("zh-CN"), normalize_locale("zh_cn"));
/// ```
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('-', "_").to_ascii_lowercase()
}
