//! Privacy Guard: PII/secret pattern scanning and redaction.
//!
//! This is not a universal PII detector. It stops the obvious patterns and
//! deliberately over-blocks long opaque tokens rather than let a pasted key
//! slip through.

use regex::Regex;

use crate::models::{Finding, PrivacyKind, Severity};
use crate::GuardError;

/// One compiled privacy pattern.
struct PrivacyPattern {
    kind: PrivacyKind,
    regex: Regex,
    message: &'static str,
    severity: Severity,
}

/// Outcome of a privacy scan.
#[derive(Debug, Clone)]
pub struct PrivacyVerdict {
    /// False iff any block-severity finding exists.
    pub allowed: bool,
    /// Copy of the input with block-severity spans replaced by placeholders.
    /// Equal to the input when nothing was blocked.
    pub redacted: String,
    /// All findings, block and warn. The caller splits by severity.
    pub findings: Vec<Finding>,
}

/// Scans raw request text for PII and secret-like content.
pub struct PrivacyGuard {
    patterns: Vec<PrivacyPattern>,
}

impl Default for PrivacyGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivacyGuard {
    /// Creates a guard with the built-in pattern table.
    pub fn new() -> Self {
        Self {
            patterns: Self::build_patterns(),
        }
    }

    /// Creates a guard with one extra block pattern on top of the built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidPattern`] if the pattern does not compile.
    pub fn with_extra_pattern(kind: PrivacyKind, pattern: &str) -> crate::Result<Self> {
        let mut patterns = Self::build_patterns();
        patterns.push(PrivacyPattern {
            kind,
            regex: Regex::new(pattern)?,
            message: "custom pattern matched",
            severity: Severity::Block,
        });
        Ok(Self { patterns })
    }

    fn build_patterns() -> Vec<PrivacyPattern> {
        vec![
            PrivacyPattern {
                kind: PrivacyKind::EmailLike,
                regex: Regex::new(r"[A-Za-z0-9._%+\-]{1,64}@[A-Za-z0-9.\-]{1,255}\.[A-Za-z]{2,63}")
                    .unwrap(),
                message: "email-shaped string found (possible personal data)",
                severity: Severity::Block,
            },
            PrivacyPattern {
                kind: PrivacyKind::PhoneLike,
                regex: Regex::new(r"(\(\d{3}\)\s?|\b\d{3}[-.])\d{3}[-.]\d{4}\b").unwrap(),
                message: "phone-shaped string found (possible personal data)",
                severity: Severity::Block,
            },
            PrivacyPattern {
                kind: PrivacyKind::PostalCodeLike,
                regex: Regex::new(r"\b\d{5}-\d{4}\b").unwrap(),
                message: "postal-code-shaped string found (possible personal data)",
                severity: Severity::Block,
            },
            PrivacyPattern {
                kind: PrivacyKind::IpLike,
                // Warn only: version strings like 1.2.3.4 match this too.
                regex: Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap(),
                message: "IP-shaped string found (possible confidential data; \
                          version strings also match)",
                severity: Severity::Warn,
            },
            PrivacyPattern {
                kind: PrivacyKind::SecretLikeLong,
                // Intentional over-block: long version strings and hashes
                // match as well. Preserved as policy, not a bug.
                regex: Regex::new(r"\b[A-Za-z0-9_\-]{32,}\b").unwrap(),
                message: "long opaque token found (possible key or password)",
                severity: Severity::Block,
            },
            PrivacyPattern {
                kind: PrivacyKind::SecretKeyword,
                regex: Regex::new(r"(?i)\b(token|secret|password|apikey|api_key|credential)\b")
                    .unwrap(),
                message: "secret-naming word found (possibly pasted by mistake)",
                severity: Severity::Block,
            },
        ]
    }

    /// Runs every pattern independently over the text.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut findings = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                findings.push(Finding {
                    kind: pattern.kind,
                    severity: pattern.severity,
                    message: pattern.message.to_string(),
                    start: m.start(),
                    end: m.end(),
                });
            }
        }
        findings
    }

    /// Scans and, when block findings exist, redacts them.
    pub fn guard(&self, text: &str) -> PrivacyVerdict {
        let findings = self.scan(text);
        let blocked: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.severity == Severity::Block)
            .collect();
        if blocked.is_empty() {
            return PrivacyVerdict {
                allowed: true,
                redacted: text.to_string(),
                findings,
            };
        }
        let redacted = redact(text, &blocked);
        PrivacyVerdict {
            allowed: false,
            redacted,
            findings,
        }
    }
}

/// Sorts and merges overlapping spans, keeping a representative kind.
fn merge_spans(findings: &[&Finding]) -> Vec<(usize, usize, PrivacyKind)> {
    let mut spans: Vec<(usize, usize, PrivacyKind)> =
        findings.iter().map(|f| (f.start, f.end, f.kind)).collect();
    spans.sort_by_key(|&(s, e, _)| (s, e));

    let mut merged: Vec<(usize, usize, PrivacyKind)> = Vec::new();
    for (s, e, k) in spans {
        match merged.last_mut() {
            Some(cur) if s <= cur.1 => cur.1 = cur.1.max(e),
            _ => merged.push((s, e, k)),
        }
    }
    merged
}

/// Replaces every merged span with a placeholder carrying its kind tag.
fn redact(text: &str, findings: &[&Finding]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (s, e, kind) in merge_spans(findings) {
        out.push_str(&text[last..s]);
        out.push_str(&format!("<REDACTED:{}>", kind));
        last = e;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_allowed() {
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("decide whether to ship the feature this sprint");
        assert!(verdict.allowed);
        assert!(verdict.findings.is_empty());
        assert_eq!(verdict.redacted, "decide whether to ship the feature this sprint");
    }

    #[test]
    fn test_email_blocked_and_redacted() {
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("contact alice@example.com about the rollout");
        assert!(!verdict.allowed);
        assert!(!verdict.redacted.contains("alice@example.com"));
        assert!(verdict.redacted.contains("<REDACTED:EMAIL_LIKE>"));
    }

    #[test]
    fn test_phone_blocked() {
        let guard = PrivacyGuard::new();
        assert!(!guard.guard("call 555-123-4567 first").allowed);
        assert!(!guard.guard("call (555) 123-4567 first").allowed);
    }

    #[test]
    fn test_postal_code_blocked() {
        let guard = PrivacyGuard::new();
        assert!(!guard.guard("ship to 90210-1234").allowed);
    }

    #[test]
    fn test_ip_is_warn_not_block() {
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("the server at 10.0.0.1 is slow");
        assert!(verdict.allowed);
        let warns: Vec<_> = verdict
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Warn)
            .collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].kind, PrivacyKind::IpLike);
    }

    #[test]
    fn test_version_string_only_warns() {
        // The IP demotion exists exactly for this case.
        let guard = PrivacyGuard::new();
        assert!(guard.guard("upgrade to release 1.2.3.4 next week").allowed);
    }

    #[test]
    fn test_long_token_over_block_is_policy() {
        // 32+ identifier characters block even when they are plausibly a
        // hash. Loosening this is a behavior change, not a fix.
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("commit deadbeefdeadbeefdeadbeefdeadbeef01 broke it");
        assert!(!verdict.allowed);
        assert_eq!(verdict.findings[0].kind, PrivacyKind::SecretLikeLong);
    }

    #[test]
    fn test_secret_keyword_case_insensitive() {
        let guard = PrivacyGuard::new();
        assert!(!guard.guard("the API_KEY is in the vault").allowed);
        assert!(!guard.guard("rotate the Password monthly").allowed);
    }

    #[test]
    fn test_overlapping_spans_merged() {
        let guard = PrivacyGuard::new();
        // Email whose local part is also a 32+ char token: two block
        // findings over overlapping spans, one placeholder in the output.
        let text = "send to abcdefghijklmnopqrstuvwxyz0123456789@example.com now";
        let verdict = guard.guard(text);
        assert!(!verdict.allowed);
        assert_eq!(verdict.redacted.matches("<REDACTED:").count(), 1);
        assert!(verdict.redacted.ends_with(" now"));
    }

    #[test]
    fn test_message_never_contains_match() {
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("mail bob@example.org");
        for finding in &verdict.findings {
            assert!(!finding.message.contains("bob@example.org"));
        }
    }

    #[test]
    fn test_empty_text() {
        let guard = PrivacyGuard::new();
        let verdict = guard.guard("");
        assert!(verdict.allowed);
        assert!(verdict.findings.is_empty());
    }

    #[test]
    fn test_with_extra_pattern() {
        let guard =
            PrivacyGuard::with_extra_pattern(PrivacyKind::SecretKeyword, r"\bbadge-id\b").unwrap();
        assert!(!guard.guard("my badge-id is on file").allowed);
    }

    #[test]
    fn test_with_extra_pattern_invalid() {
        let err = PrivacyGuard::with_extra_pattern(PrivacyKind::SecretKeyword, "(unclosed");
        assert!(err.is_err());
    }
}
