//! Markdown-to-request adapter.
//!
//! Lets a request be drafted as a plain markdown note:
//!
//! ```text
//! # Situation
//! Pick a venue for the workshop.
//!
//! ## Constraints
//! - budget is tight
//! * needs to fit 40 people
//! ```
//!
//! Headings of any depth select a section by name, case-insensitively;
//! unknown sections are skipped without error. Situation lines are joined
//! with spaces; list sections take their `-`/`*` bullet lines.

use counsel_core::DecisionRequest;

#[derive(Clone, Copy)]
enum Section {
    Situation,
    Constraints,
    Options,
    Beneficiaries,
    AffectedStructures,
    Unknown,
}

fn section_for(heading: &str) -> Section {
    match heading.trim().to_lowercase().as_str() {
        "situation" => Section::Situation,
        "constraints" => Section::Constraints,
        "options" => Section::Options,
        "beneficiaries" => Section::Beneficiaries,
        "affected_structures" | "affected structures" => Section::AffectedStructures,
        _ => Section::Unknown,
    }
}

fn bullet_text(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// Parses a markdown note into a decision request.
///
/// Never fails; an empty or unrecognized document simply yields a request
/// with an empty situation, which the caller rejects.
pub fn markdown_to_request(text: &str) -> DecisionRequest {
    let mut request = DecisionRequest::default();
    let mut situation_parts: Vec<String> = Vec::new();
    let mut section = Section::Unknown;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(heading) = line.strip_prefix('#') {
            section = section_for(heading.trim_start_matches('#'));
            continue;
        }
        match section {
            Section::Situation => situation_parts.push(line.to_string()),
            Section::Constraints => {
                if let Some(item) = bullet_text(line) {
                    request.constraints.push(item.to_string());
                }
            }
            Section::Options => {
                if let Some(item) = bullet_text(line) {
                    request.options.push(item.to_string());
                }
            }
            Section::Beneficiaries => {
                if let Some(item) = bullet_text(line) {
                    request.beneficiaries.push(item.to_string());
                }
            }
            Section::AffectedStructures => {
                if let Some(item) = bullet_text(line) {
                    request.affected_structures.push(item.to_string());
                }
            }
            Section::Unknown => {}
        }
    }

    request.situation = situation_parts.join(" ");
    request
}

/// Serializes a request as JSON, omitting empty list fields.
pub fn request_to_json(request: &DecisionRequest) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert(
        "situation".to_string(),
        serde_json::Value::String(request.situation.clone()),
    );
    for (name, list) in [
        ("constraints", &request.constraints),
        ("options", &request.options),
        ("beneficiaries", &request.beneficiaries),
        ("affected_structures", &request.affected_structures),
    ] {
        if !list.is_empty() {
            object.insert(
                name.to_string(),
                serde_json::Value::Array(
                    list.iter()
                        .map(|s| serde_json::Value::String(s.clone()))
                        .collect(),
                ),
            );
        }
    }
    serde_json::Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Situation
Pick a venue
for the workshop.

## Constraints
- budget is tight
* needs to fit 40 people

### Options
- rent the hall

# Notes
- this section is not part of the schema

# Beneficiaries
- the whole team
";

    #[test]
    fn test_sections_parsed() {
        let request = markdown_to_request(SAMPLE);
        assert_eq!(request.situation, "Pick a venue for the workshop.");
        assert_eq!(
            request.constraints,
            vec!["budget is tight", "needs to fit 40 people"]
        );
        assert_eq!(request.options, vec!["rent the hall"]);
        assert_eq!(request.beneficiaries, vec!["the whole team"]);
        assert!(request.affected_structures.is_empty());
    }

    #[test]
    fn test_heading_depth_and_case_ignored() {
        let request = markdown_to_request("#### SITUATION\nship it\n");
        assert_eq!(request.situation, "ship it");
    }

    #[test]
    fn test_affected_structures_space_variant() {
        let request =
            markdown_to_request("# Situation\nx\n# Affected Structures\n- support team\n");
        assert_eq!(request.affected_structures, vec!["support team"]);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let request = markdown_to_request("# Preamble\nignored text\n# Situation\nship it\n");
        assert_eq!(request.situation, "ship it");
        assert!(request.constraints.is_empty());
    }

    #[test]
    fn test_non_bullet_lines_in_list_sections_skipped() {
        let request =
            markdown_to_request("# Situation\nx\n# Constraints\nprose, not a bullet\n- real one\n");
        assert_eq!(request.constraints, vec!["real one"]);
    }

    #[test]
    fn test_empty_document_yields_empty_situation() {
        let request = markdown_to_request("");
        assert!(request.situation.is_empty());
    }

    #[test]
    fn test_json_omits_empty_lists() {
        let request = markdown_to_request("# Situation\nship it\n# Options\n- now\n");
        let value = request_to_json(&request);
        assert_eq!(value["situation"], "ship it");
        assert_eq!(value["options"][0], "now");
        assert!(value.get("constraints").is_none());
        assert!(value.get("asker_status").is_none());
    }
}
