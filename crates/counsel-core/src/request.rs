//! The decision request and option normalization.

use serde::{Deserialize, Serialize};

/// Fixed candidate texts used to right-pad the options list to three.
///
/// These are display filler only: they are joined into the privacy-guard
/// blob and the rendered report, but must never reach existence-ethics
/// detection (only user-supplied text is analyzed there).
pub const DEFAULT_OPTIONS: [&str; 3] = [
    "A: Play it safe (reduce failure modes)",
    "B: Strike a balance (middle course)",
    "C: Move fast (prioritize progress)",
];

/// One decision request. Every call is independent; nothing is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// What is being decided. Required.
    pub situation: String,

    /// Free-text constraints, in the order supplied.
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Up to three meaningful candidate options. Extra entries are ignored;
    /// missing or blank slots are padded with [`DEFAULT_OPTIONS`].
    #[serde(default)]
    pub options: Vec<String>,

    /// Who benefits, as declared by the asker.
    #[serde(default)]
    pub beneficiaries: Vec<String>,

    /// Affected structures, as declared by the asker.
    #[serde(default)]
    pub affected_structures: Vec<String>,

    /// The asker's title or rank. Accepted for schema compatibility and
    /// never read by the pipeline (status-invariance is test-asserted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asker_status: Option<String>,
}

impl DecisionRequest {
    /// Creates a request with just a situation.
    pub fn new(situation: impl Into<String>) -> Self {
        Self {
            situation: situation.into(),
            ..Self::default()
        }
    }

    /// Parses a request from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BriefError::Parse`] on malformed JSON. For
    /// human-readable shape diagnostics, run
    /// [`crate::validate_request`] on the raw value first.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The exactly-three display options: supplied entries first (trimmed,
    /// order preserved), fixed defaults for missing or blank slots.
    pub fn padded_options(&self) -> [String; 3] {
        let mut padded = [
            DEFAULT_OPTIONS[0].to_string(),
            DEFAULT_OPTIONS[1].to_string(),
            DEFAULT_OPTIONS[2].to_string(),
        ];
        for (i, slot) in padded.iter_mut().enumerate() {
            if let Some(supplied) = self.options.get(i) {
                let trimmed = supplied.trim();
                if !trimmed.is_empty() {
                    *slot = trimmed.to_string();
                }
            }
        }
        padded
    }
}
