//! Shared finding types for both guards.

use serde::{Deserialize, Serialize};

/// Severity tier shared by privacy findings and manipulation hits.
///
/// Aggregation downstream is performed by tag, not by guard identity:
/// `Block` findings terminate the pipeline, `Warn` findings from either
/// guard merge into one warnings list on the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The finding must stop processing.
    Block,
    /// The finding is surfaced as a warning only.
    Warn,
}

/// Category of a privacy finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrivacyKind {
    /// Email-address-shaped string.
    EmailLike,
    /// Phone-number-shaped string.
    PhoneLike,
    /// Postal-code-shaped string.
    PostalCodeLike,
    /// IP-address-shaped string. Warn-only: version strings ("1.2.3.4")
    /// false-positive too often for a hard block.
    IpLike,
    /// Opaque token of 32+ identifier characters. Deliberately over-blocks
    /// version strings and hashes; that tradeoff is asserted by tests.
    SecretLikeLong,
    /// A word that names a secret (token, password, ...).
    SecretKeyword,
}

impl PrivacyKind {
    /// Stable tag used in redaction placeholders and `detected` lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailLike => "EMAIL_LIKE",
            Self::PhoneLike => "PHONE_LIKE",
            Self::PostalCodeLike => "POSTAL_CODE_LIKE",
            Self::IpLike => "IP_LIKE",
            Self::SecretLikeLong => "SECRET_LIKE_LONG",
            Self::SecretKeyword => "SECRET_KEYWORD",
        }
    }
}

impl std::fmt::Display for PrivacyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One privacy detection. Ephemeral: produced per guard call and discarded
/// once folded into a verdict or warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Category of the match.
    pub kind: PrivacyKind,
    /// Block or warn.
    pub severity: Severity,
    /// Human-readable description. Never contains the matched content.
    pub message: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
}

/// One manipulation-phrase detection on rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManipulationHit {
    /// The phrase that matched, verbatim from the phrase table.
    pub phrase: String,
    /// Block or warn.
    pub severity: Severity,
}
