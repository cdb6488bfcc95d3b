//! Error types for the B++ tree.
//!
//! Mirrors the teacher's pattern of a single public error enum reached
//! through small associated-function constructors, with `Display`/`Error`
//! impls and a crate-wide `Result` alias.

use std::fmt;

/// Errors produced by tree construction and internal consistency checks.
///
/// User-facing absence (a missing key, an empty range) is never represented
/// here — `search`/`delete`/`range` signal absence through `Option`/`bool`,
/// not through this enum. `KeyNotFound` exists only for the strict,
/// opt-in lookup variants (see [`crate::BppTreeMap::try_get`]).
#[derive(Debug, Clone, PartialEq)]
pub enum BppTreeError {
    /// A constructor argument was out of range.
    ConfigurationError { field: &'static str, message: String },
    /// Reserved for strict lookup variants; never returned by `search`/`delete`.
    KeyNotFound,
    /// A debug-mode consistency check failed. Fatal: treat the tree as poisoned.
    InvariantViolation(String),
}

impl BppTreeError {
    pub fn configuration(field: &'static str, message: impl Into<String>) -> Self {
        BppTreeError::ConfigurationError {
            field,
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        BppTreeError::InvariantViolation(message.into())
    }
}

impl fmt::Display for BppTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BppTreeError::ConfigurationError { field, message } => {
                write!(f, "invalid configuration for `{field}`: {message}")
            }
            BppTreeError::KeyNotFound => write!(f, "key not found"),
            BppTreeError::InvariantViolation(message) => {
                write!(f, "invariant violation (tree should be considered poisoned): {message}")
            }
        }
    }
}

impl std::error::Error for BppTreeError {}

pub type BppResult<T> = Result<T, BppTreeError>;
