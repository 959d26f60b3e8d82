use std::{
    collections::{BTreeMap, HashSet},
    env,
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::scanner::{CatalogScanWarning, LoadedCatalog, load_catalogs, scan_catalog_files},
    issues::ParseErrorIssue,
};

/// Loaded catalogs plus the configuration they were loaded with.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--catalogs-root misc/ts`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Catalogs that parsed successfully, sorted by file path.
    pub catalogs: Vec<LoadedCatalog>,

    /// Catalogs that failed to load.
    pub warnings: Vec<CatalogScanWarning>,

    /// Source texts exempt from the identical-translation rule.
    pub ignore_texts: HashSet<String>,
}

impl CheckContext {
    /// Load configuration and catalogs.
    ///
    /// `paths` overrides the configured catalogs root; each entry may be a
    /// catalog file or a directory to scan.
    pub fn new(args: &CommonArgs, paths: &[PathBuf]) -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to read current directory")?;
        let config_result = load_config(&current_dir)?;
        let mut config = config_result.config;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "{} No config file found, using defaults",
                "note:".bold().cyan()
            );
        }

        if let Some(catalogs_root) = &args.catalogs_root {
            config.catalogs_root = catalogs_root.to_string_lossy().to_string();
        }

        let roots: Vec<PathBuf> = if paths.is_empty() {
            vec![PathBuf::from(&config.catalogs_root)]
        } else {
            paths.to_vec()
        };

        let mut files = Vec::new();
        for root in &roots {
            let found = scan_catalog_files(root, &config.ignores, args.verbose)
                .with_context(|| format!("Failed to scan {}", root.display()))?;
            files.extend(found);
        }
        files.sort();
        files.dedup();

        let loaded = load_catalogs(&files);

        if args.verbose {
            for warning in &loaded.warnings {
                eprintln!(
                    "{} {}: {}",
                    "warning:".bold().yellow(),
                    warning.file_path,
                    warning.error
                );
            }
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            catalogs: loaded.catalogs,
            warnings: loaded.warnings,
            ignore_texts,
        })
    }

    /// Build a context from already loaded catalogs.
    pub fn from_catalogs(config: Config, catalogs: Vec<LoadedCatalog>) -> Self {
        let ignore_texts = config.ignore_texts.iter().cloned().collect();
        Self {
            config,
            catalogs,
            warnings: Vec::new(),
            ignore_texts,
        }
    }

    /// Number of catalog files examined, including those that failed to load.
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.warnings.len()
    }

    /// Catalogs grouped by parent directory, in path order.
    pub fn groups(&self) -> BTreeMap<&str, Vec<&LoadedCatalog>> {
        let mut groups: BTreeMap<&str, Vec<&LoadedCatalog>> = BTreeMap::new();
        for catalog in &self.catalogs {
            groups.entry(catalog.group.as_str()).or_default().push(catalog);
        }
        groups
    }

    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.warnings
            .iter()
            .map(|w| ParseErrorIssue {
                file_path: w.file_path.clone(),
                error: w.error.clone(),
            })
            .collect()
    }
}
