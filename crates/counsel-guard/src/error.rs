//! Error types for guard construction.

use thiserror::Error;

/// Errors raised while building a guard from custom pattern tables.
///
/// Scanning itself is infallible; only configuration can fail.
#[derive(Debug, Error)]
pub enum GuardError {
    /// A custom privacy pattern failed to compile.
    #[error("invalid privacy pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A phrase list entry was empty.
    #[error("empty phrase in {list} list")]
    EmptyPhrase {
        /// Which list contained the empty phrase.
        list: String,
    },
}
