//! # Pipeline Integration Tests
//!
//! End-to-end runs of the decision pipeline through its public API.
//!
//! ## Properties Covered
//!
//! 1. **Determinism**: identical input, identical brief
//! 2. **Status Invariance**: `asker_status` never changes the output
//! 3. **Candidate Shape**: always three, exactly one `N/A`
//! 4. **Selection Rules**: constraint classes map to the documented pick
//! 5. **Wire Format**: the serialized brief carries the documented tags

use counsel_core::{
    CandidateId, DecisionBrief, DecisionRequest, DistortionRisk, Judgment, Pipeline, ReasonCode,
    DEFAULT_OPTIONS, DISCLAIMER,
};

fn run(request: &DecisionRequest) -> DecisionBrief {
    Pipeline::new().run(request)
}

fn request(situation: &str, constraints: &[&str]) -> DecisionRequest {
    let mut req = DecisionRequest::new(situation);
    req.constraints = constraints.iter().map(|c| c.to_string()).collect();
    req
}

// =============================================================================
// DETERMINISM AND INVARIANCE
// =============================================================================

#[test]
fn test_identical_input_identical_brief() {
    let req = request(
        "choose between refactoring now or after the release",
        &["quality bar is fixed", "two engineers available"],
    );
    let first = run(&req);
    let second = run(&req);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_asker_status_is_ignored() {
    let plain = request("choose a rollout order", &["hard deadline friday"]);
    let mut ranked = plain.clone();
    ranked.asker_status = Some("chief executive".to_string());
    assert_eq!(run(&plain), run(&ranked));

    let mut intern = plain.clone();
    intern.asker_status = Some("intern".to_string());
    assert_eq!(run(&plain), run(&intern));
}

// =============================================================================
// CANDIDATE SHAPE
// =============================================================================

#[test]
fn test_three_candidates_one_na() {
    for constraints in [&[][..], &["safety first"][..], &["urgent"][..]] {
        let brief = run(&request("pick a venue", constraints));
        let ok = brief.as_ok().expect("clean request should pass");
        assert_eq!(ok.candidates.len(), 3);
        let na: Vec<_> = ok
            .candidates
            .iter()
            .filter(|c| c.not_selected_reason_code == ReasonCode::NotApplicable)
            .collect();
        assert_eq!(na.len(), 1);
        assert_eq!(na[0].id, ok.selection.recommended_id);
    }
}

#[test]
fn test_supplied_option_kept_first_rest_padded() {
    let mut req = DecisionRequest::new("pick a venue");
    req.options = vec!["rent the conference hall".to_string()];
    let brief = run(&req);
    let ok = brief.as_ok().unwrap();
    assert_eq!(ok.candidates[0].summary, "rent the conference hall");
    assert_eq!(ok.candidates[1].summary, DEFAULT_OPTIONS[1]);
    assert_eq!(ok.candidates[2].summary, DEFAULT_OPTIONS[2]);
}

// =============================================================================
// SELECTION RULES
// =============================================================================

#[test]
fn test_safety_beats_speed_when_both_present() {
    let brief = run(&request(
        "decide the patch strategy",
        &["urgent fix needed", "safety review is mandatory"],
    ));
    let ok = brief.as_ok().unwrap();
    assert_eq!(ok.selection.recommended_id, CandidateId::A);
    assert!(ok.selection.reason_codes.contains(&ReasonCode::SafetyFirst));
    assert!(!ok.selection.reason_codes.contains(&ReasonCode::UrgencyFirst));
}

#[test]
fn test_speed_only_picks_c() {
    let brief = run(&request("decide the patch strategy", &["ship asap"]));
    let ok = brief.as_ok().unwrap();
    assert_eq!(ok.selection.recommended_id, CandidateId::C);
    assert_eq!(
        ok.candidates[0].not_selected_reason_code,
        ReasonCode::SlowestOption
    );
}

#[test]
fn test_reason_codes_base_sorted_then_linkage_appended() {
    let brief = run(&request(
        "decide the patch strategy",
        &["safety and risk and more safety talk"],
    ));
    let ok = brief.as_ok().unwrap();
    // Constraint-class codes sorted and deduplicated, existence code last.
    assert_eq!(
        ok.selection.reason_codes,
        vec![
            ReasonCode::RiskAvoidance,
            ReasonCode::SafetyFirst,
            ReasonCode::ExistenceRiskLow,
        ]
    );
}

// =============================================================================
// LIFECYCLE AND IMPACT
// =============================================================================

#[test]
fn test_end_of_life_transition_passes_as_lifecycle() {
    let brief = run(&request(
        "plan the end-of-life transition for the v1 service",
        &[],
    ));
    let ok = brief.as_ok().expect("lifecycle framing should pass");
    assert!(ok
        .selection
        .reason_codes
        .contains(&ReasonCode::ExistenceLifecycleOk));
    assert_eq!(ok.existence_analysis.judgment, Judgment::Lifecycle);
    assert_eq!(ok.existence_analysis.distortion_risk, DistortionRisk::Low);
    assert!(ok
        .existence_analysis
        .judgment_text
        .contains("natural lifecycle"));
}

#[test]
fn test_impact_score_stays_in_bounds() {
    let mut req = DecisionRequest::new("plan the product sunset while we crush the last rival");
    req.affected_structures = (0..9).map(|i| format!("structure {}", i)).collect();
    let brief = run(&req);
    let ok = brief.as_ok().unwrap();
    assert!(ok.existence_analysis.impact_score <= 8);
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[test]
fn test_ok_brief_wire_shape() {
    let brief = run(&request("pick a venue", &[]));
    let value: serde_json::Value = serde_json::to_value(&brief).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["candidates"].as_array().unwrap().len(), 3);
    assert!(value["selection"]["reason_codes"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| ReasonCode::is_valid(c.as_str().unwrap())));
    assert_eq!(value["disclaimer"], DISCLAIMER);
    // Clean request: the warnings key is omitted entirely.
    assert!(value.get("warnings").is_none());
}

#[test]
fn test_blocked_brief_wire_shape() {
    let brief = run(&DecisionRequest::new("crush the competitor"));
    let value: serde_json::Value = serde_json::to_value(&brief).unwrap();
    assert_eq!(value["status"], "blocked");
    assert!(value.get("disclaimer").is_none());
    assert!(value["safe_alternatives"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_brief_round_trips_through_json() {
    let brief = run(&request("pick a venue", &["quality matters"]));
    let json = serde_json::to_string(&brief).unwrap();
    let back: DecisionBrief = serde_json::from_str(&json).unwrap();
    assert_eq!(back, brief);
}
