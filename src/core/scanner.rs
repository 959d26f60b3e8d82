use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::{data::Catalog, parsers::ts::parse_catalog_file};

/// File extension of Qt Linguist catalogs.
pub const CATALOG_EXTENSION: &str = "ts";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A catalog that loaded successfully.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Locale from the file name (`policy_ja.ts` -> `ja`), if present.
    pub locale: Option<String>,
    /// Parent directory; catalogs sharing it translate the same policy file.
    pub group: String,
}

impl LoadedCatalog {
    /// File-name locale, falling back to the `language` attribute.
    pub fn effective_locale(&self) -> Option<&str> {
        self.locale
            .as_deref()
            .or(self.catalog.language.as_deref())
    }

    pub fn file_path(&self) -> &str {
        &self.catalog.file_path
    }
}

/// A warning from loading catalog files.
#[derive(Debug, Clone)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadCatalogsResult {
    /// Loaded catalogs, sorted by file path.
    pub catalogs: Vec<LoadedCatalog>,
    pub warnings: Vec<CatalogScanWarning>,
}

/// Extracts the locale from a catalog file name.
///
/// Everything after the first `_` of the file stem is the locale:
/// - "policy_ja.ts" -> Some("ja")
/// - "policy_zh_CN.ts" -> Some("zh_CN")
/// - "policy.ts" -> None
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|stem| stem.split_once('_'))
        .map(|(_, locale)| locale.to_string())
        .filter(|locale| !locale.is_empty())
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
}

/// Find all catalog files under `root`, skipping ignored paths.
///
/// Glob ignores are matched against the path relative to `root`; literal
/// ignores are path prefixes relative to `root`.
pub fn scan_catalog_files(root: &Path, ignores: &[String], verbose: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!(
            "Catalogs directory '{}' does not exist.\n\
             Hint: Check your .tscatrc.json 'catalogsRoot' setting.",
            root.display()
        );
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_catalog_file(path))
        .filter(|path| !literal_ignore_paths.iter().any(|p| path.starts_with(p)))
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            !glob_patterns.iter().any(|p| p.matches_path(relative))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Load catalogs in parallel. Failures become warnings, not errors.
pub fn load_catalogs(paths: &[PathBuf]) -> LoadCatalogsResult {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path, parse_catalog_file(path)))
        .collect();

    let mut result = LoadCatalogsResult::default();
    for (path, parsed) in results {
        match parsed {
            Ok(catalog) => result.catalogs.push(LoadedCatalog {
                catalog,
                locale: extract_locale(path),
                group: path
                    .parent()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_default(),
            }),
            Err(e) => result.warnings.push(CatalogScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: e.detail(),
            }),
        }
    }

    result
        .catalogs
        .sort_by(|a, b| a.catalog.file_path.cmp(&b.catalog.file_path));
    result.warnings.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    result
}
