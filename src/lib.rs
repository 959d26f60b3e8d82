//! tscat - PolicyKit translation catalog checker
//!
//! tscat is a CLI tool and library for loading and validating the Qt
//! Linguist (`.ts`) catalogs that localize PolicyKit action prompts.
//! Each entry is keyed by `<action-id>!message` or `<action-id>!description`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, TS parser and writer, catalog scanning
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
