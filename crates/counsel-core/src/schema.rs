//! Pre-parse request validation with human-readable diagnostics.
//!
//! `serde_json` rejects a malformed request with one terse error; this pass
//! instead collects every problem, with typo hints for near-miss field
//! names, so a caller can fix the whole payload in one round.

use serde_json::Value;

/// Fields the request accepts.
const ALLOWED_FIELDS: &[&str] = &[
    "situation",
    "constraints",
    "options",
    "beneficiaries",
    "affected_structures",
    "asker_status",
];

/// Common misspellings mapped to the intended field.
const TYPO_HINTS: &[(&str, &str)] = &[
    ("constrint", "constraints"),
    ("contraint", "constraints"),
    ("contraints", "constraints"),
    ("constrains", "constraints"),
    ("constrants", "constraints"),
    ("constraint", "constraints"),
    ("option", "options"),
    ("optins", "options"),
    ("situaton", "situation"),
    ("sitiation", "situation"),
    ("beneficiary", "beneficiaries"),
    ("benificiaries", "beneficiaries"),
    ("affected_structure", "affected_structures"),
];

/// Fields that must be arrays of strings when present.
const STRING_LIST_FIELDS: &[&str] = &[
    "constraints",
    "options",
    "beneficiaries",
    "affected_structures",
];

fn hint_for(field: &str) -> Option<&'static str> {
    TYPO_HINTS
        .iter()
        .find(|(typo, _)| *typo == field)
        .map(|(_, correct)| *correct)
}

/// Validates a raw JSON value against the request shape.
///
/// Returns an empty list when the value is a well-formed request; otherwise
/// one message per problem. Never panics on any input.
pub fn validate_request(value: &Value) -> Vec<String> {
    let mut problems = Vec::new();

    let Some(object) = value.as_object() else {
        return vec!["request must be a JSON object".to_string()];
    };

    for field in object.keys() {
        if !ALLOWED_FIELDS.contains(&field.as_str()) {
            match hint_for(field) {
                Some(correct) => problems.push(format!(
                    "unknown field: '{}' (did you mean '{}'?)",
                    field, correct
                )),
                None => problems.push(format!("unknown field: '{}'", field)),
            }
        }
    }

    match object.get("situation") {
        None => problems.push("missing required field: 'situation'".to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => {
            problems.push("'situation' must not be empty".to_string());
        }
        Some(Value::String(_)) => {}
        Some(_) => problems.push("'situation' must be a string".to_string()),
    }

    for field in STRING_LIST_FIELDS {
        match object.get(*field) {
            None => {}
            Some(Value::Array(items)) => {
                if items.iter().any(|item| !item.is_string()) {
                    problems.push(format!("'{}' must contain only strings", field));
                }
            }
            Some(_) => problems.push(format!("'{}' must be an array of strings", field)),
        }
    }

    if let Some(status) = object.get("asker_status") {
        if !status.is_string() && !status.is_null() {
            problems.push("'asker_status' must be a string".to_string());
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_minimal_request() {
        assert!(validate_request(&json!({"situation": "pick a venue"})).is_empty());
    }

    #[test]
    fn test_valid_full_request() {
        let value = json!({
            "situation": "pick a venue",
            "constraints": ["budget is tight"],
            "options": ["rent the hall"],
            "beneficiaries": ["the team"],
            "affected_structures": ["relational"],
            "asker_status": "director"
        });
        assert!(validate_request(&value).is_empty());
    }

    #[test]
    fn test_non_object_rejected() {
        let problems = validate_request(&json!(["not", "an", "object"]));
        assert_eq!(problems, vec!["request must be a JSON object"]);
    }

    #[test]
    fn test_missing_situation() {
        let problems = validate_request(&json!({"constraints": []}));
        assert!(problems.contains(&"missing required field: 'situation'".to_string()));
    }

    #[test]
    fn test_empty_situation() {
        let problems = validate_request(&json!({"situation": "   "}));
        assert!(problems.contains(&"'situation' must not be empty".to_string()));
    }

    #[test]
    fn test_typo_hint() {
        let problems = validate_request(&json!({
            "situation": "pick a venue",
            "constrint": ["budget"]
        }));
        assert!(problems
            .contains(&"unknown field: 'constrint' (did you mean 'constraints'?)".to_string()));
    }

    #[test]
    fn test_unknown_field_without_hint() {
        let problems = validate_request(&json!({
            "situation": "pick a venue",
            "mystery": 1
        }));
        assert!(problems.contains(&"unknown field: 'mystery'".to_string()));
    }

    #[test]
    fn test_wrong_list_type() {
        let problems = validate_request(&json!({
            "situation": "pick a venue",
            "constraints": "budget is tight"
        }));
        assert!(problems.contains(&"'constraints' must be an array of strings".to_string()));
    }

    #[test]
    fn test_mixed_list_contents() {
        let problems = validate_request(&json!({
            "situation": "pick a venue",
            "options": ["fine", 2]
        }));
        assert!(problems.contains(&"'options' must contain only strings".to_string()));
    }

    #[test]
    fn test_multiple_problems_all_reported() {
        let problems = validate_request(&json!({
            "optins": [],
            "constraints": 3
        }));
        assert!(problems.len() >= 3);
    }
}
