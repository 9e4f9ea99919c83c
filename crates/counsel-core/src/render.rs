//! Plain-text rendering of decision briefs.
//!
//! The rendered form is also what the manipulation guard scans, so every
//! section of the report is covered by the final gate.

use crate::brief::{DecisionBrief, OkBrief};

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("[{}]\n", heading));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

fn render_ok(ok: &OkBrief) -> String {
    let mut out = String::from("=== Decision Brief ===\n\n");

    out.push_str("[Input]\n");
    out.push_str(&format!("situation: {}\n", ok.input.situation));
    if ok.input.constraints.is_empty() {
        out.push_str("constraints: (none)\n");
    } else {
        out.push_str(&format!(
            "constraints: {}\n",
            ok.input.constraints.join(" / ")
        ));
    }
    out.push('\n');

    out.push_str("[Candidates]\n");
    for candidate in &ok.candidates {
        out.push_str(&format!(
            "{}. {} [{}]\n",
            candidate.id,
            candidate.summary,
            candidate.not_selected_reason_code
        ));
    }
    out.push('\n');

    out.push_str("[Selection]\n");
    out.push_str(&format!("recommended: {}\n", ok.selection.recommended_id));
    let codes: Vec<&str> = ok
        .selection
        .reason_codes
        .iter()
        .map(|c| c.as_str())
        .collect();
    out.push_str(&format!("reason codes: {}\n", codes.join(", ")));
    out.push_str(&format!("explanation: {}\n\n", ok.selection.explanation));

    push_list(&mut out, "Counterarguments", &ok.counterarguments);
    push_list(&mut out, "Uncertainties", &ok.uncertainties);
    push_list(&mut out, "Externalities", &ok.externalities);
    push_list(&mut out, "Next Questions", &ok.next_questions);

    out.push_str("[Existence Analysis]\n");
    out.push_str(&format!(
        "beneficiaries: {}\n",
        ok.existence_analysis.beneficiaries.join(", ")
    ));
    out.push_str(&format!(
        "affected structures: {}\n",
        ok.existence_analysis.affected_structures.join(", ")
    ));
    out.push_str(&format!(
        "impact score: {} / 8\n",
        ok.existence_analysis.impact_score
    ));
    out.push_str(&format!("{}\n\n", ok.existence_analysis.judgment_text));

    out.push_str("[Impact Map]\n");
    out.push_str(&ok.impact_map);
    if !ok.impact_map.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');

    out.push_str("[Disclaimer]\n");
    out.push_str(&ok.disclaimer);
    out.push('\n');

    if let Some(warnings) = &ok.warnings {
        out.push('\n');
        push_list(&mut out, "Warnings", warnings);
    }

    out
}

/// Renders a brief as the plain-text report shown on a terminal.
pub fn render(brief: &DecisionBrief) -> String {
    match brief {
        DecisionBrief::Ok(ok) => render_ok(ok),
        DecisionBrief::Blocked(blocked) => {
            let mut out = String::from("=== BLOCKED ===\n\n");
            out.push_str(&format!("blocked by: {}\n", blocked.blocked_by));
            out.push_str(&format!("reason: {}\n", blocked.reason));
            if !blocked.detected.is_empty() {
                out.push_str(&format!("detected: {}\n", blocked.detected.join(", ")));
            }
            if let Some(preview) = &blocked.redacted_preview {
                out.push_str(&format!("redacted preview: {}\n", preview));
            }
            if !blocked.safe_alternatives.is_empty() {
                out.push('\n');
                push_list(&mut out, "Safe Alternatives", &blocked.safe_alternatives);
            }
            out
        }
    }
}
