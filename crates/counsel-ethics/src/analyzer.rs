//! The three-question existence analysis and its default implementation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::Lexicon;

/// Placeholder emitted when the request names no beneficiaries.
pub const UNKNOWN_BENEFICIARIES: &str =
    "unknown (add beneficiaries to the request to improve accuracy)";

/// Placeholder emitted when no affected structure could be determined.
pub const UNKNOWN_STRUCTURES: &str =
    "unknown (add affected_structures to the request to improve accuracy)";

/// The five fixed structure layers a decision can affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureLayer {
    Individual,
    Relational,
    Societal,
    Cognitive,
    Ecological,
}

impl StructureLayer {
    /// Name used in analysis output and impact-map columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Relational => "relational",
            Self::Societal => "societal",
            Self::Cognitive => "cognitive",
            Self::Ecological => "ecological",
        }
    }
}

impl std::fmt::Display for StructureLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to the third question: cycle or destruction?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    /// Destruction language without lifecycle framing. Terminates the pipeline.
    SelfInterestedDestruction,
    /// Natural termination or transition framing only.
    Lifecycle,
    /// Neither, or both.
    Unclear,
}

/// How strongly the request risks distorting existing structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistortionRisk {
    Low,
    Medium,
    High,
}

impl DistortionRisk {
    /// Bonus added to the impact score for this risk tier.
    pub fn impact_bonus(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 3,
            Self::High => 5,
        }
    }
}

/// The structural analysis attached to every ok report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistenceAnalysis {
    /// Who benefits, verbatim from the request, or the unknown placeholder.
    pub beneficiaries: Vec<String>,
    /// Affected structure layers: declared verbatim, detected layer names,
    /// or the unknown placeholder.
    pub affected_structures: Vec<String>,
    /// Cycle-or-destruction judgment.
    pub judgment: Judgment,
    /// Distortion risk tier.
    pub distortion_risk: DistortionRisk,
    /// Bounded 0..=8 score: known layer count plus risk bonus.
    pub impact_score: u8,
    /// Fixed rationale template for the (judgment, risk) pair.
    pub judgment_text: String,
}

impl ExistenceAnalysis {
    /// True when beneficiaries fell back to the unknown placeholder.
    pub fn beneficiaries_unknown(&self) -> bool {
        self.beneficiaries.iter().any(|b| b == UNKNOWN_BENEFICIARIES)
    }

    /// True when no affected structure is known.
    pub fn structures_unknown(&self) -> bool {
        self.affected_structures
            .iter()
            .any(|s| s == UNKNOWN_STRUCTURES)
    }

    /// The non-placeholder structure entries.
    pub fn known_structures(&self) -> Vec<&str> {
        self.affected_structures
            .iter()
            .filter(|s| s.as_str() != UNKNOWN_STRUCTURES)
            .map(|s| s.as_str())
            .collect()
    }
}

/// Analysis plus the destruction evidence that produced it.
///
/// The evidence list (hard hits first, then every soft hit present in the
/// text) feeds the refusal report when the judgment terminates the
/// pipeline; it is not part of the serialized analysis.
#[derive(Debug, Clone)]
pub struct ExistenceReport {
    pub analysis: ExistenceAnalysis,
    pub destruction_hits: Vec<String>,
}

/// User-supplied fields only. Padded display options must never reach this
/// input, or the pipeline's own filler words would feed detection.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub situation: &'a str,
    pub constraints: &'a [String],
    pub options: &'a [String],
    pub beneficiaries: &'a [String],
    pub affected_structures: &'a [String],
}

/// Capability seam for the existence analysis.
///
/// The pipeline holds a `Box<dyn Analyze>`; a richer external analyzer can
/// be injected, and its absence simply means the default keyword analyzer
/// runs. Nothing here can fail.
pub trait Analyze: Send + Sync {
    fn analyze(&self, input: &AnalysisInput<'_>) -> ExistenceReport;
}

/// The self-contained keyword analyzer. This is the default and the
/// fallback when no external analyzer is configured.
pub struct KeywordAnalyzer {
    lexicon: Lexicon,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordAnalyzer {
    /// Creates an analyzer with the default English lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::default(),
        }
    }

    /// Creates an analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon in use (refusal paths look up reframing suggestions here).
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn detect_layers(&self, text: &str) -> Vec<String> {
        self.lexicon
            .layer_keywords
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw.as_str())))
            .map(|(layer, _)| layer.as_str().to_string())
            .collect()
    }
}

impl Analyze for KeywordAnalyzer {
    fn analyze(&self, input: &AnalysisInput<'_>) -> ExistenceReport {
        let mut parts = vec![input.situation.to_string()];
        parts.extend(input.constraints.iter().cloned());
        parts.extend(input.options.iter().cloned());
        let text = parts.join(" ").to_lowercase();

        // Q1: beneficiaries, verbatim or explicitly unknown. Never invented.
        let beneficiaries = if input.beneficiaries.is_empty() {
            vec![UNKNOWN_BENEFICIARIES.to_string()]
        } else {
            input.beneficiaries.to_vec()
        };

        // Q2: affected structure layers.
        let affected_structures = if !input.affected_structures.is_empty() {
            input.affected_structures.to_vec()
        } else {
            let detected = self.detect_layers(&text);
            if detected.is_empty() {
                vec![UNKNOWN_STRUCTURES.to_string()]
            } else {
                detected
            }
        };

        // Q3: destruction vs lifecycle.
        let hard_hits: Vec<String> = self
            .lexicon
            .hard_destruction
            .iter()
            .filter(|kw| text.contains(kw.as_str()))
            .cloned()
            .collect();
        let soft_hits: Vec<String> = self
            .lexicon
            .soft_destruction
            .iter()
            .filter(|kw| text.contains(kw.as_str()))
            .cloned()
            .collect();
        let safe_target_present = self
            .lexicon
            .safe_targets
            .iter()
            .any(|kw| text.contains(kw.as_str()));
        let lifecycle_hit = self
            .lexicon
            .lifecycle
            .iter()
            .any(|kw| text.contains(kw.as_str()));

        // Whole-text suppression: one safe target neutralizes every soft hit.
        let soft_active = !soft_hits.is_empty() && !safe_target_present;
        let destruction = !hard_hits.is_empty() || soft_active;

        let (judgment, distortion_risk, judgment_text) = match (destruction, lifecycle_hit) {
            (true, false) => (
                Judgment::SelfInterestedDestruction,
                DistortionRisk::High,
                "Possible self-interested destruction detected. Confirm the \
                 beneficiaries and affected structures and consider alternatives."
                    .to_string(),
            ),
            (false, true) => (
                Judgment::Lifecycle,
                DistortionRisk::Low,
                "Judged to be within a natural lifecycle. Distortion of existing \
                 structures rated low."
                    .to_string(),
            ),
            (true, true) => (
                Judgment::Unclear,
                DistortionRisk::Medium,
                "Both lifecycle and destruction language detected. Clarify whose \
                 interest the change serves."
                    .to_string(),
            ),
            (false, false) => (
                Judgment::Unclear,
                DistortionRisk::Low,
                "No clear destruction or lifecycle pattern detected. Distortion \
                 risk currently rated low."
                    .to_string(),
            ),
        };

        let known_layers = affected_structures
            .iter()
            .filter(|s| s.as_str() != UNKNOWN_STRUCTURES)
            .count()
            .min(5) as u8;
        let impact_score = (known_layers + distortion_risk.impact_bonus()).min(8);

        debug!(
            ?judgment,
            ?distortion_risk,
            impact_score,
            hard = hard_hits.len(),
            soft = soft_hits.len(),
            "existence analysis complete"
        );

        // Evidence lists every matched keyword, hard then soft. Safe-target
        // suppression affects the judgment, not the evidence.
        let mut destruction_hits = hard_hits;
        destruction_hits.extend(soft_hits);

        ExistenceReport {
            analysis: ExistenceAnalysis {
                beneficiaries,
                affected_structures,
                judgment,
                distortion_risk,
                impact_score,
                judgment_text,
            },
            destruction_hits,
        }
    }
}
