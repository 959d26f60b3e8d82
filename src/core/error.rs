use std::io;

use super::data::KeyError;

/// Failure to load or write a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The document violates the TS schema. No partial catalog is produced.
    #[error("malformed document (line {line}): {reason}")]
    MalformedDocument { line: usize, reason: MalformedReason },

    #[error("failed to write catalog: {0}")]
    Write(String),
}

impl CatalogError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, CatalogError::MalformedDocument { .. })
    }

    /// One-line message that includes the underlying I/O error.
    pub fn detail(&self) -> String {
        match self {
            CatalogError::Io { source, .. } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }

    pub fn reason(&self) -> Option<&MalformedReason> {
        match self {
            CatalogError::MalformedDocument { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Schema violation found while loading a TS document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("{0}")]
    Syntax(String),
    #[error("document has no <TS> root element")]
    MissingRoot,
    #[error("unexpected root element <{0}>, expected <TS>")]
    UnexpectedRoot(String),
    #[error("unexpected content after </TS>")]
    ContentAfterRoot,
    #[error("unexpected text inside <{0}>")]
    UnexpectedText(String),
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("<{element}> has invalid {attribute}=\"{value}\"")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
    #[error("<{element}> is missing required <{child}>")]
    MissingElement {
        element: &'static str,
        child: &'static str,
    },
    #[error("<{element}> has more than one <{child}>")]
    RepeatedElement {
        element: &'static str,
        child: &'static str,
    },
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: KeyError },
    #[error("duplicate key '{key}' (first defined on line {first_line})")]
    DuplicateKey { key: String, first_line: usize },
    #[error("<{0}> is never closed")]
    UnclosedElement(String),
}
