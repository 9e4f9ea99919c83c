//! # Counsel Guard
//!
//! Input and output guards for the counsel decision pipeline.
//!
//! Two independent guards live here:
//! - **Privacy Guard**: scans raw request text for PII/secret-like patterns
//!   and redacts the offending spans.
//! - **Manipulation Guard**: scans rendered report text for persuasive or
//!   inciting phrasing before it reaches the reader.
//!
//! Both guards report findings with a shared [`Severity`] tag so the caller
//! can aggregate warnings from either source into one list. Neither guard
//! holds state across calls; pattern tables are built once and never mutated.

mod error;
mod manipulation;
mod models;
mod privacy;

pub use error::GuardError;
pub use manipulation::ManipulationGuard;
pub use models::{Finding, ManipulationHit, PrivacyKind, Severity};
pub use privacy::{PrivacyGuard, PrivacyVerdict};

/// Result type for guard construction with custom patterns.
pub type Result<T> = std::result::Result<T, GuardError>;
