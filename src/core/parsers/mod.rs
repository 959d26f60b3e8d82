//! File parsers for catalog documents.
//!
//! - `ts`: Qt Linguist TS catalog loader

pub mod ts;
