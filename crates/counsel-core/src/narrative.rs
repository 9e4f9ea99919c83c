//! Narrative sections of the ok report: questions, uncertainties,
//! counterarguments, externalities, and the impact-map scaffold.
//!
//! Every builder is deterministic text assembly over the analysis; the
//! ladders are tiered so that mutually exclusive prompts never co-occur.

use counsel_ethics::{DistortionRisk, ExistenceAnalysis, Judgment};

/// Closing line of every ok report.
pub const DISCLAIMER: &str =
    "This brief is reference material. The decision itself, and responsibility \
     for it, remain with you.";

/// Cell text for unconfirmed impact-map entries.
const UNCONFIRMED_CELL: &str = "? (needs confirmation)";

/// Emitted instead of a table when neither axis is known.
const IMPACT_MAP_UNAVAILABLE: &str =
    "An impact map cannot be generated: neither beneficiaries nor affected \
     structures are known. Add both to the request.";

/// Placeholder row label when beneficiaries are unknown.
const UNIDENTIFIED_ROW: &str = "beneficiaries (unidentified)";

/// Builds the follow-up question list, capped at six.
///
/// Two base questions always lead. The gap-driven questions follow, then
/// exactly one tier question: medium distortion risk pre-empts lifecycle,
/// which pre-empts the high-impact mitigation prompt.
pub fn build_next_questions(
    analysis: &ExistenceAnalysis,
    constraints_empty: bool,
) -> Vec<String> {
    let mut questions = vec![
        "What does success look like, in numbers if possible?".to_string(),
        "If this fails, how bad does it get, and for whom?".to_string(),
    ];

    if analysis.beneficiaries_unknown() {
        questions.push(
            "Who actually benefits from this decision, and who might lose out?".to_string(),
        );
    }

    if analysis.structures_unknown() {
        questions.push(
            "Which layers could this touch: individual, relational, societal, \
             cognitive, ecological?"
                .to_string(),
        );
    } else {
        questions.push(format!(
            "How exactly would each option land on {}?",
            analysis.known_structures().join(", ")
        ));
    }

    if analysis.distortion_risk == DistortionRisk::Medium {
        questions.push(
            "Whose private interest does the structural change serve, and is \
             that acceptable?"
                .to_string(),
        );
    } else if analysis.judgment == Judgment::Lifecycle {
        questions.push(
            "What transition support do the people affected by the wind-down need?".to_string(),
        );
    } else if analysis.impact_score >= 4 {
        questions.push(
            "Which single mitigation would most reduce the damage if this goes \
             wrong?"
                .to_string(),
        );
    }

    if constraints_empty {
        questions.push(
            "What hard constraints (budget, deadline, people) actually apply?".to_string(),
        );
    }

    questions.truncate(6);
    questions
}

/// Builds the uncertainty list, capped at five.
pub fn build_uncertainties(analysis: &ExistenceAnalysis) -> Vec<String> {
    let mut items = vec![
        "Whether the stated constraints are the complete set.".to_string(),
        "How parties outside the request will react.".to_string(),
    ];

    if analysis.beneficiaries_unknown() {
        items.push("Who the real beneficiaries are.".to_string());
    }
    if analysis.structures_unknown() {
        items.push("Which structures the decision actually touches.".to_string());
    }

    if analysis.distortion_risk == DistortionRisk::Medium {
        items.push(
            "Whether the structural change serves a private interest or a \
             shared one."
                .to_string(),
        );
    } else if analysis.judgment == Judgment::Lifecycle {
        items.push("Whether the transition timeline is realistic for those affected.".to_string());
    } else if analysis.impact_score >= 4 {
        items.push("Whether the estimated impact is understated.".to_string());
    }

    items.truncate(5);
    items
}

/// Builds the counterargument list against the recommendation, capped at
/// four. The two base items are fixed regardless of which candidate won.
pub fn build_counterarguments(analysis: &ExistenceAnalysis) -> Vec<String> {
    let mut items = vec![
        "The keyword reading of the constraints may miss the real priority.".to_string(),
        "The losing candidates' strengths are real; the pick forfeits them.".to_string(),
    ];

    if analysis.distortion_risk == DistortionRisk::Medium {
        items.push(
            "The mixed lifecycle and destruction signals could resolve either \
             way on closer reading."
                .to_string(),
        );
    } else if analysis.judgment == Judgment::Lifecycle {
        items.push(
            "Lifecycle framing can mask a removal someone still depends on.".to_string(),
        );
    } else if analysis.impact_score >= 4 {
        items.push("The impact estimate rests on incomplete structure information.".to_string());
    }

    items.truncate(4);
    items
}

/// The fixed externality reminders.
pub fn build_externalities() -> Vec<String> {
    vec![
        "Effects on people not named in the request.".to_string(),
        "Load shifted onto neighboring teams or systems.".to_string(),
        "The precedent this decision sets for similar calls later.".to_string(),
    ]
}

/// Renders the beneficiaries-by-structures scaffold as a markdown table.
///
/// Cells are never guessed; each reads [`UNCONFIRMED_CELL`] until the asker
/// fills it in. With beneficiaries unknown a single placeholder row is
/// emitted; with both axes unknown no table can be drawn at all.
pub fn build_impact_map(analysis: &ExistenceAnalysis) -> String {
    let beneficiaries_unknown = analysis.beneficiaries_unknown();
    let structures = analysis.known_structures();

    if beneficiaries_unknown && structures.is_empty() {
        return IMPACT_MAP_UNAVAILABLE.to_string();
    }

    let columns: Vec<&str> = if structures.is_empty() {
        vec!["structures (unidentified)"]
    } else {
        structures
    };
    let rows: Vec<&str> = if beneficiaries_unknown {
        vec![UNIDENTIFIED_ROW]
    } else {
        analysis.beneficiaries.iter().map(|b| b.as_str()).collect()
    };

    let mut table = String::new();
    table.push_str("| beneficiary \\ structure |");
    for column in &columns {
        table.push_str(&format!(" {} |", column));
    }
    table.push('\n');
    table.push_str("| --- |");
    for _ in &columns {
        table.push_str(" --- |");
    }
    table.push('\n');
    for row in &rows {
        table.push_str(&format!("| {} |", row));
        for _ in &columns {
            table.push_str(&format!(" {} |", UNCONFIRMED_CELL));
        }
        table.push('\n');
    }
    table
}
