//! # Counsel Ethics
//!
//! The existence-ethics analyzer behind the decision pipeline's second gate.
//!
//! Three structural questions are answered per request:
//! 1. Who benefits? (never fabricated; "unknown" when the request is silent)
//! 2. Which structure layers are affected? (individual, relational,
//!    societal, cognitive, ecological)
//! 3. Is this a natural lifecycle change or self-interested destruction?
//!
//! Detection is purely lexical. All keyword tables live in a [`Lexicon`]
//! value so another language's word lists can be swapped in without touching
//! the judgment logic. The analyzer behind the pipeline is the [`Analyze`]
//! trait; [`KeywordAnalyzer`] is the self-contained default, and a richer
//! external analyzer can be injected without the pipeline noticing.

mod alternatives;
mod analyzer;
mod lexicon;

pub use alternatives::existence_alternatives;
pub use analyzer::{
    Analyze, AnalysisInput, DistortionRisk, ExistenceAnalysis, ExistenceReport, Judgment,
    KeywordAnalyzer, StructureLayer, UNKNOWN_BENEFICIARIES, UNKNOWN_STRUCTURES,
};
pub use lexicon::Lexicon;
