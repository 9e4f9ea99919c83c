//! Safe-alternative suggestions for existence-ethics refusals.

use crate::lexicon::Lexicon;

/// Fixed alternatives appended to every existence refusal.
const STANDARD_ALTERNATIVES: &[&str] = &[
    "Re-draft the options with the beneficiaries and affected structures stated explicitly.",
    "Spell out who bears the loss and whether the change is part of a natural cycle.",
    "Check whether the goal can be reframed as a lifecycle transition instead of a removal.",
];

/// Builds the safe-alternatives list for a refusal.
///
/// The first two detected keywords contribute their keyword-specific
/// reframing suggestion (keywords without an entry are skipped without
/// error), followed by the three standard alternatives. Duplicates are
/// removed, first occurrence wins.
pub fn existence_alternatives(detected: &[String], lexicon: &Lexicon) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for keyword in detected.iter().take(2) {
        if let Some(suggestion) = lexicon.reframing_for(keyword) {
            out.push(suggestion.to_string());
        }
    }
    for standard in STANDARD_ALTERNATIVES {
        out.push(standard.to_string());
    }
    dedup_preserving_order(out)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alts(detected: &[&str]) -> Vec<String> {
        let detected: Vec<String> = detected.iter().map(|s| s.to_string()).collect();
        existence_alternatives(&detected, &Lexicon::default())
    }

    #[test]
    fn test_hard_keyword_specific_suggestion() {
        let result = alts(&["dominate"]);
        assert!(result.iter().any(|a| a.contains("dominate")));
        assert!(result.iter().any(|a| a.contains("coexistence")));
    }

    #[test]
    fn test_soft_keyword_specific_suggestion() {
        let result = alts(&["exclud"]);
        assert!(result.iter().any(|a| a.contains("exclusion")));
    }

    #[test]
    fn test_unknown_keyword_falls_back_to_standard() {
        let result = alts(&["no-such-keyword"]);
        assert_eq!(result.len(), 3);
        for standard in [
            "Re-draft the options with the beneficiaries and affected structures stated explicitly.",
            "Spell out who bears the loss and whether the change is part of a natural cycle.",
            "Check whether the goal can be reframed as a lifecycle transition instead of a removal.",
        ] {
            assert!(result.contains(&standard.to_string()));
        }
    }

    #[test]
    fn test_only_first_two_keywords_specific() {
        let result = alts(&["dominate", "monopolize", "destroy"]);
        assert!(result.iter().any(|a| a.contains("dominate")));
        assert!(result.iter().any(|a| a.contains("monopolize")));
        // The third keyword's suggestion (renewal/rebuilding) is not added.
        assert!(!result.iter().any(|a| a.contains("rebuilding")));
    }

    #[test]
    fn test_standard_alternatives_always_present() {
        let result = alts(&["destroy"]);
        assert!(result.iter().any(|a| a.contains("beneficiaries and affected structures")));
        assert!(result.iter().any(|a| a.contains("lifecycle transition")));
    }

    #[test]
    fn test_empty_detected_gives_standard_three() {
        assert_eq!(alts(&[]).len(), 3);
    }

    #[test]
    fn test_no_duplicates() {
        let result = alts(&["dominate", "dominate"]);
        let mut sorted = result.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), result.len());
    }
}
