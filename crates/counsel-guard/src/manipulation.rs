//! Manipulation Guard: output-side phrase scanning.
//!
//! Runs over the *rendered* report text, not the raw request, because
//! user-supplied option text can reach the narrative and must be screened
//! after assembly. This is an output check for the pipeline's own voice,
//! not input censorship.

use crate::models::{ManipulationHit, Severity};

/// Strong directive or inciting phrases. Any hit discards the draft.
const BLOCK_PHRASES: &[&str] = &[
    "must obey",
    "spread the word",
    "burn it down",
    "rise up against",
    "incite",
    "brainwash",
    "unforgivable",
];

/// Assertive-but-legal phrases. Context-dependent, so warn only.
const WARN_PHRASES: &[&str] = &[
    "absolutely",
    "without question",
    "guaranteed",
    "trust me",
    "no doubt about it",
    "right away",
];

/// Scans rendered report text for manipulative phrasing.
pub struct ManipulationGuard {
    block: Vec<String>,
    warn: Vec<String>,
}

impl Default for ManipulationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ManipulationGuard {
    /// Creates a guard with the built-in phrase lists.
    pub fn new() -> Self {
        Self {
            block: BLOCK_PHRASES.iter().map(|p| p.to_string()).collect(),
            warn: WARN_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Creates a guard with custom phrase lists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GuardError::EmptyPhrase`] if either list contains an
    /// empty string (an empty phrase would match everything).
    pub fn with_phrases(block: Vec<String>, warn: Vec<String>) -> crate::Result<Self> {
        for (list, name) in [(&block, "block"), (&warn, "warn")] {
            if list.iter().any(|p| p.is_empty()) {
                return Err(crate::GuardError::EmptyPhrase {
                    list: name.to_string(),
                });
            }
        }
        Ok(Self { block, warn })
    }

    /// Returns every matching phrase, block hits first, then warn hits.
    ///
    /// Detection is plain substring containment over the lowercased text;
    /// all matches are returned, not just the first.
    pub fn scan(&self, text: &str) -> Vec<ManipulationHit> {
        if text.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        let mut hits = Vec::new();
        for phrase in &self.block {
            if lower.contains(phrase.as_str()) {
                hits.push(ManipulationHit {
                    phrase: phrase.clone(),
                    severity: Severity::Block,
                });
            }
        }
        for phrase in &self.warn {
            if lower.contains(phrase.as_str()) {
                hits.push(ManipulationHit {
                    phrase: phrase.clone(),
                    severity: Severity::Warn,
                });
            }
        }
        hits
    }
}
