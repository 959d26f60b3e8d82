//! Catalog engine: data model, loader, writer and scanner.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model (entries, keys, report positions)
//! - `error`: Load/write errors
//! - `parsers`: TS document loader
//! - `writer`: TS document writer
//! - `scanner`: Catalog discovery and parallel loading
//! - `context`: Merged configuration plus the loaded catalogs

pub mod context;
pub mod data;
pub mod error;
pub mod parsers;
pub mod scanner;
pub mod writer;

pub use context::CheckContext;
pub use data::{
    Catalog, CatalogContext, CatalogEntry, FIELD_SEPARATOR, Field, KeyError, MessageContext,
    MessageKey, MessageLocation, TranslationStatus, is_valid_action_id,
};
pub use error::{CatalogError, MalformedReason};
pub use parsers::ts::{parse_catalog, parse_catalog_file};
pub use writer::write_catalog;
