//! Error types for counsel-core.
//!
//! Policy refusals are not errors; they travel as blocked briefs. The only
//! fallible boundary is turning caller-supplied JSON into a request.

use thiserror::Error;

/// Errors for request parsing.
#[derive(Debug, Error)]
pub enum BriefError {
    /// The payload was not valid JSON or did not fit the request shape.
    #[error("invalid request JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
