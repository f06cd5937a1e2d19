//! Crate-level error types.
//!
//! Only configuration paths are fallible. The per-frame classify and
//! camera-update paths never return errors; they degrade to "no gesture"
//! or "pose unchanged" instead.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// Generic I/O failure while reading or writing a preset or catalog.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Body catalog parsing failure or an inconsistent catalog.
    CatalogParse(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
