//! The pipeline facade: runs a request through the gates and assemblers.
//!
//! Gate order is fixed and short-circuiting. The privacy guard sees the
//! situation, constraints, and padded options; the existence analyzer sees
//! only the user-supplied fields; the manipulation guard sees the fully
//! rendered draft. `asker_status` is never read anywhere in this module.

use counsel_ethics::{
    existence_alternatives, Analyze, AnalysisInput, Judgment, KeywordAnalyzer, Lexicon,
};
use counsel_guard::{ManipulationGuard, PrivacyGuard, Severity};
use tracing::{debug, info};

use crate::brief::{
    BlockedBrief, BlockedBy, Candidate, CandidateId, DecisionBrief, EchoedInput, OkBrief,
    Selection,
};
use crate::narrative::{
    build_counterarguments, build_externalities, build_impact_map, build_next_questions,
    build_uncertainties, DISCLAIMER,
};
use crate::render::render;
use crate::request::DecisionRequest;
use crate::selector;

const PRIVACY_REASON: &str =
    "The request contains personal or secret-looking strings. Stopping here.";

const PRIVACY_ALTERNATIVES: &[&str] = &[
    "Remove names, contact details, and identifiers, then describe the \
     situation in general terms.",
    "Delete long opaque strings; keys and credentials should never appear in \
     a request.",
];

const EXISTENCE_REASON: &str =
    "A pattern of self-interested destruction was detected. No recommendation \
     will be produced in this framing.";

const MANIPULATION_REASON: &str =
    "The drafted report contained manipulative phrasing and was discarded.";

const MANIPULATION_ALTERNATIVES: &[&str] = &[
    "Re-generate the wording in a neutral register.",
    "Present the candidates and comparison points without a recommendation.",
];

/// The guarded decision pipeline. Stateless across runs.
pub struct Pipeline {
    privacy: PrivacyGuard,
    manipulation: ManipulationGuard,
    analyzer: Box<dyn Analyze>,
    lexicon: Lexicon,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates a pipeline with the built-in guards and keyword analyzer.
    pub fn new() -> Self {
        Self {
            privacy: PrivacyGuard::new(),
            manipulation: ManipulationGuard::new(),
            analyzer: Box::new(KeywordAnalyzer::new()),
            lexicon: Lexicon::default(),
        }
    }

    /// Creates a pipeline around an injected existence analyzer. The guards
    /// and the reframing lexicon stay built-in.
    pub fn with_analyzer(analyzer: Box<dyn Analyze>) -> Self {
        Self {
            privacy: PrivacyGuard::new(),
            manipulation: ManipulationGuard::new(),
            analyzer,
            lexicon: Lexicon::default(),
        }
    }

    /// Runs one request to completion. Refusals come back as blocked briefs;
    /// this function itself cannot fail.
    pub fn run(&self, request: &DecisionRequest) -> DecisionBrief {
        let padded_options = request.padded_options();

        // Gate 1: privacy, over situation, constraints, and padded options.
        // Declared beneficiaries and structures are not scanned.
        let mut blob_parts = vec![request.situation.clone()];
        blob_parts.extend(request.constraints.iter().cloned());
        blob_parts.extend(padded_options.iter().cloned());
        let blob = blob_parts.join("\n");

        let verdict = self.privacy.guard(&blob);
        if !verdict.allowed {
            let mut detected: Vec<String> = verdict
                .findings
                .iter()
                .filter(|f| f.severity == Severity::Block)
                .map(|f| f.kind.as_str().to_string())
                .collect();
            detected.sort();
            detected.dedup();
            info!(gate = "privacy", ?detected, "request blocked");
            return DecisionBrief::Blocked(BlockedBrief {
                blocked_by: BlockedBy::Privacy,
                reason: PRIVACY_REASON.to_string(),
                detected,
                safe_alternatives: PRIVACY_ALTERNATIVES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                redacted_preview: Some(verdict.redacted),
            });
        }
        let privacy_warnings: Vec<String> = verdict
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Warn)
            .map(|f| format!("privacy notice [{}]: {}", f.kind, f.message))
            .collect();

        // Gate 2: existence ethics, over user-supplied fields only.
        let report = self.analyzer.analyze(&AnalysisInput {
            situation: &request.situation,
            constraints: &request.constraints,
            options: &request.options,
            beneficiaries: &request.beneficiaries,
            affected_structures: &request.affected_structures,
        });
        if report.analysis.judgment == Judgment::SelfInterestedDestruction {
            info!(
                gate = "existence",
                detected = ?report.destruction_hits,
                "request blocked"
            );
            let safe_alternatives =
                existence_alternatives(&report.destruction_hits, &self.lexicon);
            return DecisionBrief::Blocked(BlockedBrief {
                blocked_by: BlockedBy::ExistenceEthics,
                reason: EXISTENCE_REASON.to_string(),
                detected: report.destruction_hits,
                safe_alternatives,
                redacted_preview: None,
            });
        }
        let analysis = report.analysis;

        // Selection.
        let constraints_text = request.constraints.join(" / ");
        let (mut recommended, mut reason_codes, mut explanation) =
            selector::choose(&constraints_text);
        selector::link_existence(&analysis, &mut reason_codes, &mut explanation);
        selector::apply_impact_override(
            analysis.impact_score,
            &mut recommended,
            &mut reason_codes,
            &mut explanation,
        );

        let candidates: Vec<Candidate> = CandidateId::ALL
            .iter()
            .zip(padded_options.iter())
            .map(|(&id, summary)| Candidate {
                id,
                summary: summary.clone(),
                not_selected_reason_code: selector::candidate_code(recommended, id),
            })
            .collect();

        // Narrative assembly.
        let next_questions = build_next_questions(&analysis, request.constraints.is_empty());
        let uncertainties = build_uncertainties(&analysis);
        let counterarguments = build_counterarguments(&analysis);
        let externalities = build_externalities();
        let impact_map = build_impact_map(&analysis);

        let mut ok = OkBrief {
            input: EchoedInput {
                situation: request.situation.clone(),
                constraints: request.constraints.clone(),
            },
            candidates,
            selection: Selection {
                recommended_id: recommended,
                reason_codes,
                explanation,
            },
            counterarguments,
            uncertainties,
            externalities,
            next_questions,
            existence_analysis: analysis,
            impact_map,
            disclaimer: DISCLAIMER.to_string(),
            warnings: None,
        };

        // Gate 3: manipulation, over the rendered draft.
        let draft = render(&DecisionBrief::Ok(ok.clone()));
        let hits = self.manipulation.scan(&draft);
        let block_hits: Vec<String> = hits
            .iter()
            .filter(|h| h.severity == Severity::Block)
            .map(|h| h.phrase.clone())
            .collect();
        if !block_hits.is_empty() {
            info!(gate = "manipulation", detected = ?block_hits, "draft discarded");
            return DecisionBrief::Blocked(BlockedBrief {
                blocked_by: BlockedBy::Manipulation,
                reason: MANIPULATION_REASON.to_string(),
                detected: block_hits,
                safe_alternatives: MANIPULATION_ALTERNATIVES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                redacted_preview: None,
            });
        }

        // Warnings: privacy notices first, then manipulation notices.
        let mut warnings = privacy_warnings;
        warnings.extend(
            hits.iter()
                .filter(|h| h.severity == Severity::Warn)
                .map(|h| format!("manipulation notice: assertive phrase \"{}\" in the draft", h.phrase)),
        );
        if !warnings.is_empty() {
            ok.warnings = Some(warnings);
        }

        debug!(recommended = %ok.selection.recommended_id, "brief assembled");
        DecisionBrief::Ok(ok)
    }
}
