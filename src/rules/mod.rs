//! Rule implementations for tscat.
//!
//! Each rule is a pure function over loaded catalogs returning a specific
//! issue type, plus a `check_*_issues` wrapper taking the whole context.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared utility functions
//! - `incomplete_pair`: Actions missing their message or description
//! - `unfinished`: Empty or unfinished translations
//! - `identical`: Translations equal to the source text
//! - `language_mismatch`: File-name locale vs declared language
//! - `locale_gap`: Keys missing in sibling locales
//! - `mixed_namespace`: Entries outside the catalog's namespace

pub mod helpers;
pub mod identical;
pub mod incomplete_pair;
pub mod language_mismatch;
pub mod locale_gap;
pub mod mixed_namespace;
pub mod unfinished;
