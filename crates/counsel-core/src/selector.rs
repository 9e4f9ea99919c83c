//! Rule-based recommendation selection.
//!
//! Priority is strict: safety-class constraints pick A even when speed-class
//! keywords co-occur; speed-class picks C; otherwise B. The escalation
//! override can later move a B/C pick to A when the impact score is high.

use counsel_ethics::{DistortionRisk, ExistenceAnalysis, Judgment};
use tracing::debug;

use crate::brief::{CandidateId, ReasonCode};

/// Safety/compliance/quality constraint keywords and their codes.
const SAFETY_WORDS: &[(&str, ReasonCode)] = &[
    ("safety", ReasonCode::SafetyFirst),
    ("safe", ReasonCode::SafetyFirst),
    ("accident", ReasonCode::SafetyFirst),
    ("risk", ReasonCode::RiskAvoidance),
    ("compliance", ReasonCode::ComplianceFirst),
    ("legal", ReasonCode::ComplianceFirst),
    ("regulat", ReasonCode::ComplianceFirst),
    ("quality", ReasonCode::QualityFirst),
];

/// Urgency/deadline constraint keywords and their codes.
const SPEED_WORDS: &[(&str, ReasonCode)] = &[
    ("speed", ReasonCode::SpeedFirst),
    ("fast", ReasonCode::SpeedFirst),
    ("deadline", ReasonCode::DeadlineDriven),
    ("due date", ReasonCode::DeadlineDriven),
    ("urgent", ReasonCode::UrgencyFirst),
    ("asap", ReasonCode::UrgencyFirst),
];

/// `NOT_SELECTED[recommended][other]`: why each losing candidate lost.
fn not_selected_code(recommended: CandidateId, other: CandidateId) -> ReasonCode {
    use CandidateId::{A, B, C};
    match (recommended, other) {
        (A, B) => ReasonCode::LessSafeThanA,
        (A, C) => ReasonCode::LeastSafeOption,
        (B, A) => ReasonCode::OverlyConservative,
        (B, C) => ReasonCode::OverlyAggressive,
        (C, A) => ReasonCode::SlowestOption,
        (C, B) => ReasonCode::LessFastThanC,
        _ => ReasonCode::NotApplicable,
    }
}

/// The code carried by a candidate: `N/A` for the winner, a losing code
/// otherwise.
pub fn candidate_code(recommended: CandidateId, candidate: CandidateId) -> ReasonCode {
    if recommended == candidate {
        ReasonCode::NotApplicable
    } else {
        not_selected_code(recommended, candidate)
    }
}

fn matched_codes(text: &str, table: &[(&str, ReasonCode)]) -> Vec<ReasonCode> {
    let mut codes: Vec<ReasonCode> = table
        .iter()
        .filter(|(word, _)| text.contains(word))
        .map(|(_, code)| *code)
        .collect();
    codes.sort_by_key(|c| c.as_str());
    codes.dedup();
    codes
}

fn code_list(codes: &[ReasonCode]) -> String {
    codes
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps the joined constraint text to a base recommendation.
pub fn choose(constraints_text: &str) -> (CandidateId, Vec<ReasonCode>, String) {
    let text = constraints_text.to_lowercase();

    let safety_codes = matched_codes(&text, SAFETY_WORDS);
    if !safety_codes.is_empty() {
        let explanation = format!(
            "Constraints mention safety or risk concerns ({}); provisionally \
             recommending A, the safe side.",
            code_list(&safety_codes)
        );
        return (CandidateId::A, safety_codes, explanation);
    }

    let speed_codes = matched_codes(&text, SPEED_WORDS);
    if !speed_codes.is_empty() {
        let explanation = format!(
            "Constraints mention deadline or speed pressure ({}); provisionally \
             recommending C, the fast side.",
            code_list(&speed_codes)
        );
        return (CandidateId::C, speed_codes, explanation);
    }

    (
        CandidateId::B,
        vec![ReasonCode::NoConstraints],
        "Constraints are limited; provisionally recommending B, the balanced \
         middle."
            .to_string(),
    )
}

/// Appends the existence-linkage code and explanation clause.
pub fn link_existence(
    analysis: &ExistenceAnalysis,
    reason_codes: &mut Vec<ReasonCode>,
    explanation: &mut String,
) {
    if analysis.distortion_risk == DistortionRisk::Medium {
        explanation.push_str(
            " Structural distortion risk: medium; a context check is advised.",
        );
        reason_codes.push(ReasonCode::ExistenceRiskMedium);
    } else if analysis.judgment == Judgment::Lifecycle {
        explanation.push_str(
            " Structural change judged a natural lifecycle; distortion risk low.",
        );
        reason_codes.push(ReasonCode::ExistenceLifecycleOk);
    } else {
        explanation.push_str(
            " Structural distortion risk: low; no clear destruction pattern.",
        );
        reason_codes.push(ReasonCode::ExistenceRiskLow);
    }
}

/// Escalates a non-A recommendation to A when the impact score is high.
///
/// Applied at most once, after the existence linkage; never re-entrant.
pub fn apply_impact_override(
    impact_score: u8,
    recommended: &mut CandidateId,
    reason_codes: &mut Vec<ReasonCode>,
    explanation: &mut String,
) {
    if impact_score >= 6 && *recommended != CandidateId::A {
        debug!(impact_score, from = %recommended, "impact override to A");
        *recommended = CandidateId::A;
        reason_codes.push(ReasonCode::ImpactOverride);
        explanation.push_str(&format!(
            " Impact score {} of 8 warrants the conservative option; \
             recommendation escalated to A.",
            impact_score
        ));
    }
}
