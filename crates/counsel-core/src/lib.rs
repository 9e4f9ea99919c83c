//! # Counsel Core
//!
//! A guarded decision pipeline: one natural-language decision request in,
//! one structured decision brief out. Three refusal gates wrap a rule-based
//! recommendation selector and a narrative assembler.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        COUNSEL PIPELINE                        │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │  request ─▶ pad options ─▶ Privacy Guard ──▶ blocked?          │
//! │                                 │                              │
//! │                                 ▼                              │
//! │                        Existence Analyzer ──▶ blocked?         │
//! │                                 │                              │
//! │                                 ▼                              │
//! │                 Selector + Narrative Assembler                 │
//! │                                 │                              │
//! │                                 ▼                              │
//! │               render ─▶ Manipulation Guard ──▶ blocked?        │
//! │                                 │                              │
//! │                                 ▼                              │
//! │                           decision brief                       │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Gate order is fixed: Privacy, then Existence Ethics, then Manipulation.
//!   Only the first triggered gate's refusal is ever returned.
//! - The pipeline is a pure synchronous function: no I/O, no state across
//!   calls, byte-identical output for identical input.
//! - `asker_status` is accepted on the request and never influences output.
//! - Refusals are values (`status = blocked`), never errors; malformed input
//!   is reported as a list of validation messages, never a panic.

mod brief;
mod error;
mod narrative;
mod pipeline;
mod render;
mod request;
mod schema;
mod selector;

pub use brief::{
    BlockedBrief, BlockedBy, Candidate, CandidateId, DecisionBrief, EchoedInput, OkBrief,
    ReasonCode, Selection,
};
pub use error::BriefError;
pub use narrative::DISCLAIMER;
pub use pipeline::Pipeline;
pub use render::render;
pub use request::{DecisionRequest, DEFAULT_OPTIONS};
pub use schema::validate_request;

// Re-export the analyzer seam and its types so embedders can inject their
// own analyzer and inspect results without depending on the leaf crate.
pub use counsel_ethics::{
    Analyze, AnalysisInput, DistortionRisk, ExistenceAnalysis, ExistenceReport, Judgment,
    KeywordAnalyzer, Lexicon, StructureLayer,
};

/// Result type for the few genuinely fallible operations (input parsing).
pub type Result<T> = std::result::Result<T, BriefError>;
