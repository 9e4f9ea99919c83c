//! The decision brief: the pipeline's only output type.

use counsel_ethics::ExistenceAnalysis;
use serde::{Deserialize, Serialize};

/// Identifier of one of the three fixed candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateId {
    A,
    B,
    C,
}

impl CandidateId {
    /// The three ids in display order.
    pub const ALL: [CandidateId; 3] = [CandidateId::A, CandidateId::B, CandidateId::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed reason-code enumeration shared by the selection and existence
/// subsystems. Consumers must treat any string outside this set as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    // Selection codes.
    #[serde(rename = "SAFETY_FIRST")]
    SafetyFirst,
    #[serde(rename = "RISK_AVOIDANCE")]
    RiskAvoidance,
    #[serde(rename = "COMPLIANCE_FIRST")]
    ComplianceFirst,
    #[serde(rename = "QUALITY_FIRST")]
    QualityFirst,
    #[serde(rename = "SPEED_FIRST")]
    SpeedFirst,
    #[serde(rename = "DEADLINE_DRIVEN")]
    DeadlineDriven,
    #[serde(rename = "URGENCY_FIRST")]
    UrgencyFirst,
    #[serde(rename = "NO_CONSTRAINTS")]
    NoConstraints,
    // Existence linkage codes.
    #[serde(rename = "EXISTENCE_RISK_LOW")]
    ExistenceRiskLow,
    #[serde(rename = "EXISTENCE_RISK_MEDIUM")]
    ExistenceRiskMedium,
    #[serde(rename = "EXISTENCE_LIFECYCLE_OK")]
    ExistenceLifecycleOk,
    #[serde(rename = "IMPACT_OVERRIDE")]
    ImpactOverride,
    // Non-selection codes.
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "LESS_SAFE_THAN_A")]
    LessSafeThanA,
    #[serde(rename = "LEAST_SAFE_OPTION")]
    LeastSafeOption,
    #[serde(rename = "OVERLY_CONSERVATIVE")]
    OverlyConservative,
    #[serde(rename = "OVERLY_AGGRESSIVE")]
    OverlyAggressive,
    #[serde(rename = "SLOWEST_OPTION")]
    SlowestOption,
    #[serde(rename = "LESS_FAST_THAN_C")]
    LessFastThanC,
}

impl ReasonCode {
    /// Every valid code, for consumer-side validation.
    pub const ALL: [ReasonCode; 19] = [
        Self::SafetyFirst,
        Self::RiskAvoidance,
        Self::ComplianceFirst,
        Self::QualityFirst,
        Self::SpeedFirst,
        Self::DeadlineDriven,
        Self::UrgencyFirst,
        Self::NoConstraints,
        Self::ExistenceRiskLow,
        Self::ExistenceRiskMedium,
        Self::ExistenceLifecycleOk,
        Self::ImpactOverride,
        Self::NotApplicable,
        Self::LessSafeThanA,
        Self::LeastSafeOption,
        Self::OverlyConservative,
        Self::OverlyAggressive,
        Self::SlowestOption,
        Self::LessFastThanC,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SafetyFirst => "SAFETY_FIRST",
            Self::RiskAvoidance => "RISK_AVOIDANCE",
            Self::ComplianceFirst => "COMPLIANCE_FIRST",
            Self::QualityFirst => "QUALITY_FIRST",
            Self::SpeedFirst => "SPEED_FIRST",
            Self::DeadlineDriven => "DEADLINE_DRIVEN",
            Self::UrgencyFirst => "URGENCY_FIRST",
            Self::NoConstraints => "NO_CONSTRAINTS",
            Self::ExistenceRiskLow => "EXISTENCE_RISK_LOW",
            Self::ExistenceRiskMedium => "EXISTENCE_RISK_MEDIUM",
            Self::ExistenceLifecycleOk => "EXISTENCE_LIFECYCLE_OK",
            Self::ImpactOverride => "IMPACT_OVERRIDE",
            Self::NotApplicable => "N/A",
            Self::LessSafeThanA => "LESS_SAFE_THAN_A",
            Self::LeastSafeOption => "LEAST_SAFE_OPTION",
            Self::OverlyConservative => "OVERLY_CONSERVATIVE",
            Self::OverlyAggressive => "OVERLY_AGGRESSIVE",
            Self::SlowestOption => "SLOWEST_OPTION",
            Self::LessFastThanC => "LESS_FAST_THAN_C",
        }
    }

    /// True when `code` spells a member of the closed set.
    pub fn is_valid(code: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == code)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled candidate option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub summary: String,
    /// `N/A` for the recommended candidate, a specific losing code otherwise.
    pub not_selected_reason_code: ReasonCode,
}

/// The explainable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub recommended_id: CandidateId,
    /// Codes explaining the pick: the constraint-class codes sorted and
    /// deduplicated, then the existence-linkage code, then the impact
    /// override when it fired, in that append order.
    pub reason_codes: Vec<ReasonCode>,
    pub explanation: String,
}

/// Echo of the sanitized input carried on ok briefs. The asker's status is
/// deliberately not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedInput {
    pub situation: String,
    pub constraints: Vec<String>,
}

/// Which gate refused the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockedBy {
    Privacy,
    ExistenceEthics,
    Manipulation,
}

impl BlockedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Privacy => "Privacy",
            Self::ExistenceEthics => "Existence Ethics",
            Self::Manipulation => "Manipulation",
        }
    }
}

impl std::fmt::Display for BlockedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full ok-report payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkBrief {
    pub input: EchoedInput,
    /// Always exactly three entries; exactly one carries `N/A`.
    pub candidates: Vec<Candidate>,
    pub selection: Selection,
    pub counterarguments: Vec<String>,
    pub uncertainties: Vec<String>,
    pub externalities: Vec<String>,
    /// At most six.
    pub next_questions: Vec<String>,
    pub existence_analysis: ExistenceAnalysis,
    /// Rendered scaffold table, or a fixed cannot-be-generated message.
    pub impact_map: String,
    pub disclaimer: String,
    /// Warn-severity findings from both guards, privacy first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// A structured refusal from one of the three gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedBrief {
    pub blocked_by: BlockedBy,
    pub reason: String,
    /// Evidence: pattern kinds or matched keywords/phrases.
    pub detected: Vec<String>,
    pub safe_alternatives: Vec<String>,
    /// Present only for privacy refusals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redacted_preview: Option<String>,
}

/// The pipeline's final output: a normal recommendation bundle or a refusal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DecisionBrief {
    Ok(OkBrief),
    Blocked(BlockedBrief),
}

impl DecisionBrief {
    /// Returns true for a normal report.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true for a refusal.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    /// The ok payload, if any.
    pub fn as_ok(&self) -> Option<&OkBrief> {
        match self {
            Self::Ok(ok) => Some(ok),
            Self::Blocked(_) => None,
        }
    }

    /// The refusal payload, if any.
    pub fn as_blocked(&self) -> Option<&BlockedBrief> {
        match self {
            Self::Ok(_) => None,
            Self::Blocked(blocked) => Some(blocked),
        }
    }
}
