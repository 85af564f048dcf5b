//! Crate-level error types.

use std::fmt;

use crate::engine::SurfaceId;

/// Errors produced by the vitrine crate.
///
/// None of these are fatal to a page: the engine logs presentation-level
/// failures and carries on rendering sibling surfaces.
#[derive(Debug)]
pub enum VitrineError {
    /// A panel key outside the controller's closed set was selected.
    InvalidSelection(String),
    /// A command referenced a surface that is not mounted.
    UnknownSurface(SurfaceId),
    /// A typewriter was given no phrases to cycle.
    EmptyPhrases,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Asset catalog parsing failure.
    CatalogParse(String),
    /// A browser API call failed.
    Browser(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection(key) => {
                write!(f, "invalid panel selection: {key:?}")
            }
            Self::UnknownSurface(id) => write!(f, "unknown surface: {id}"),
            Self::EmptyPhrases => {
                write!(f, "typewriter needs at least one phrase")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::Browser(msg) => write!(f, "browser error: {msg}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
