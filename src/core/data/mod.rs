//! Core data types for TS catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog, CatalogContext, CatalogEntry, TranslationStatus
//! - `key`: Catalog keys (`<action-id>!<field>`) and the Field enum
//! - `message`: Report positions (MessageLocation, MessageContext)

pub mod catalog;
pub mod key;
pub mod message;

pub use catalog::{Catalog, CatalogContext, CatalogEntry, TranslationStatus};
pub use key::{FIELD_SEPARATOR, Field, KeyError, MessageKey, is_valid_action_id};
pub use message::{MessageContext, MessageLocation};
