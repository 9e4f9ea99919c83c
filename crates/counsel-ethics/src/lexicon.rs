//! Keyword tables for existence-ethics detection.
//!
//! The tables are configuration, not logic: a deployment for another
//! language replaces the `Default` lexicon wholesale. Matching everywhere
//! is lowercase substring containment, so entries may be stems
//! ("exclud" matches "exclude", "excluding", "exclusion").

use crate::analyzer::StructureLayer;

/// The complete keyword configuration for one language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Keyword sets per structure layer, in fixed layer order.
    pub layer_keywords: Vec<(StructureLayer, Vec<String>)>,
    /// Signals of destruction regardless of context.
    pub hard_destruction: Vec<String>,
    /// Signals of destruction unless a safe target co-occurs.
    pub soft_destruction: Vec<String>,
    /// Legitimate objects of suppression. Presence of any of these anywhere
    /// in the text suppresses all SOFT detection for that call.
    pub safe_targets: Vec<String>,
    /// Natural termination or transition framing.
    pub lifecycle: Vec<String>,
    /// Keyword-specific reframing suggestions used in refusal output.
    /// Every hard and soft keyword has an entry (test-asserted).
    pub reframing: Vec<(String, String)>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            layer_keywords: vec![
                (
                    StructureLayer::Individual,
                    owned(&[
                        "individual",
                        "person",
                        "privacy",
                        "dignity",
                        "health",
                        "wellbeing",
                        "employee",
                    ]),
                ),
                (
                    StructureLayer::Relational,
                    owned(&[
                        "family",
                        "community",
                        "trust",
                        "team",
                        "organization",
                        "colleague",
                        "customer",
                        "partner",
                        "stakeholder",
                    ]),
                ),
                (
                    StructureLayer::Societal,
                    owned(&[
                        "society",
                        "institution",
                        "fairness",
                        "diversity",
                        "democracy",
                        "regulation",
                        "market",
                        "industry",
                    ]),
                ),
                (
                    StructureLayer::Cognitive,
                    owned(&[
                        "autonomy",
                        "judgment",
                        "thinking",
                        "decision-making",
                        "freedom",
                        "opinion",
                        "choice",
                    ]),
                ),
                (
                    StructureLayer::Ecological,
                    owned(&[
                        "environment",
                        "nature",
                        "sustainab",
                        "ecosystem",
                        "energy",
                        "resource",
                    ]),
                ),
            ],
            hard_destruction: owned(&[
                "crush",
                "destroy",
                "monopolize",
                "dominate",
                "sabotage",
                "annihilate",
            ]),
            soft_destruction: owned(&[
                "exclud",
                "eliminat",
                "suppress",
                "silenc",
                "drive out",
                "shut out",
            ]),
            safe_targets: owned(&[
                "bug",
                "risk",
                "threat",
                "fraud",
                "incident",
                "defect",
                "vulnerability",
                "spam",
                "hazard",
                "outage",
                "abuse",
            ]),
            lifecycle: owned(&[
                "end-of-life",
                "sunset",
                "retire",
                "decommission",
                "transition",
                "handover",
                "migration",
                "phase out",
                "wind down",
                "succession",
            ]),
            reframing: vec![
                pair(
                    "crush",
                    "Reframe \"crush\" as out-executing: compete on value the \
                     customer can verify, not on the rival's collapse.",
                ),
                pair(
                    "destroy",
                    "Reframe \"destroy\" as renewal and rebuilding: state what \
                     replaces the old structure and who inherits it.",
                ),
                pair(
                    "monopolize",
                    "Reframe \"monopolize\" as coexistence: aim for a defensible \
                     share while the market stays contestable.",
                ),
                pair(
                    "dominate",
                    "Reframe \"dominate\" as coexistence and partnership: lead the \
                     segments where you add verifiable value.",
                ),
                pair(
                    "sabotage",
                    "Drop \"sabotage\": improve your own offer instead of degrading \
                     someone else's.",
                ),
                pair(
                    "annihilate",
                    "Reframe \"annihilate\" as winning on merit: name the problem \
                     you solve better than anyone.",
                ),
                pair(
                    "exclud",
                    "Reframe exclusion as explicit criteria plus transition support \
                     for whoever no longer fits them.",
                ),
                pair(
                    "eliminat",
                    "Reframe elimination as phased retirement with a named successor.",
                ),
                pair(
                    "suppress",
                    "Reframe suppression as a transparent process in which \
                     objections are recorded and answered.",
                ),
                pair(
                    "silenc",
                    "Reframe silencing as structured dissent: collect objections in \
                     a visible channel with a response deadline.",
                ),
                pair(
                    "drive out",
                    "Reframe driving out as letting participants self-select against \
                     published criteria.",
                ),
                pair(
                    "shut out",
                    "Reframe shutting out as conditional access: state the \
                     conditions under which the door reopens.",
                ),
            ],
        }
    }

    /// Looks up the reframing suggestion for a detected keyword, if any.
    pub fn reframing_for(&self, keyword: &str) -> Option<&str> {
        self.reframing
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v.as_str())
    }
}

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_string(), v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hard_keyword_has_reframing() {
        let lex = Lexicon::default();
        for kw in &lex.hard_destruction {
            assert!(
                lex.reframing_for(kw).is_some(),
                "hard keyword '{}' missing a reframing entry",
                kw
            );
        }
    }

    #[test]
    fn test_every_soft_keyword_has_reframing() {
        let lex = Lexicon::default();
        for kw in &lex.soft_destruction {
            assert!(
                lex.reframing_for(kw).is_some(),
                "soft keyword '{}' missing a reframing entry",
                kw
            );
        }
    }

    #[test]
    fn test_five_layers_in_fixed_order() {
        let lex = Lexicon::default();
        let layers: Vec<StructureLayer> = lex.layer_keywords.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            layers,
            vec![
                StructureLayer::Individual,
                StructureLayer::Relational,
                StructureLayer::Societal,
                StructureLayer::Cognitive,
                StructureLayer::Ecological,
            ]
        );
    }

    #[test]
    fn test_reframing_for_unknown_keyword() {
        let lex = Lexicon::default();
        assert!(lex.reframing_for("no-such-keyword").is_none());
    }
}
