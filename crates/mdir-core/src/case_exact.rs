//! # caseExactMatch — Case-Sensitive Directory String Equality
//!
//! The X.520 `caseExactMatch` rule (OID 2.5.13.5): two Directory String
//! values are equivalent when they differ only in incidental whitespace
//! formatting (`"John  Smith "` equals `"John Smith"`), while case
//! differences remain distinct. This separates it from the
//! case-insensitive variant, which additionally folds case.
//!
//! ## Canonical Form
//!
//! Normalization trims the value, then collapses every interior run of
//! consecutive spaces to a single space, preserving the case of every
//! non-space character. Equality over normalized values is byte-exact,
//! so the canonical bytes double as index keys.
//!
//! ## Invariants
//!
//! - Deterministic: equal inputs always produce identical bytes.
//! - Idempotent: normalizing canonical bytes yields the same bytes.
//! - Total: any byte sequence is accepted; the rule never rejects.

use crate::error::SyntaxViolation;
use crate::rule::{
    MatchingRule, RuleDescriptor, CASE_EXACT_MATCH_NAME, CASE_EXACT_MATCH_OID,
    DIRECTORY_STRING_SYNTAX_OID,
};
use crate::value::{AttributeValue, NormalizedValue};

static CASE_EXACT_DESCRIPTOR: RuleDescriptor = RuleDescriptor::new(
    Some(CASE_EXACT_MATCH_NAME),
    CASE_EXACT_MATCH_OID,
    DIRECTORY_STRING_SYNTAX_OID,
    Some("case-sensitive equality over Directory String values"),
);

/// The `caseExactMatch` equality matching rule.
///
/// Stateless; `initialize` is the default no-op. A single shared instance
/// serves any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseExactMatchingRule;

impl CaseExactMatchingRule {
    /// Construct the rule. `const` so it can live in statics.
    pub const fn new() -> Self {
        Self
    }
}

impl MatchingRule for CaseExactMatchingRule {
    fn descriptor(&self) -> &RuleDescriptor {
        &CASE_EXACT_DESCRIPTOR
    }

    /// Canonicalize a raw value:
    ///
    /// 1. Decode the bytes as text (lossy: unpaired bytes become U+FFFD,
    ///    the value is never rejected).
    /// 2. Trim leading and trailing characters at or below U+0020.
    /// 3. If nothing remains: a non-empty value that was all whitespace
    ///    becomes a single space; a zero-length value stays empty.
    /// 4. Otherwise collapse each interior run of consecutive spaces to
    ///    one space. Case is preserved.
    ///
    /// # Errors
    ///
    /// Never fails; the `SyntaxViolation` arm exists for rule variants
    /// whose syntax does validate.
    fn normalize(&self, raw: &AttributeValue) -> Result<NormalizedValue, SyntaxViolation> {
        Ok(fold_spaces(raw))
    }

    fn matches(&self, a: &NormalizedValue, b: &NormalizedValue) -> bool {
        a.as_bytes() == b.as_bytes()
    }
}

/// Trim and space-fold a raw value into its canonical bytes.
///
/// Trimming strips every character at or below U+0020; the fold touches
/// only the literal space U+0020, so embedded tab or newline runs survive
/// unchanged.
fn fold_spaces(raw: &AttributeValue) -> NormalizedValue {
    let text = String::from_utf8_lossy(raw.as_bytes());
    let trimmed = text.trim_matches(|c: char| c <= ' ');

    if trimmed.is_empty() {
        // All-whitespace values collapse to one space; zero-length values
        // stay empty.
        return if raw.is_empty() {
            NormalizedValue::from_bytes(Vec::new())
        } else {
            NormalizedValue::from_bytes(vec![b' '])
        };
    }

    let mut folded = String::with_capacity(trimmed.len());
    let mut last_was_space = false;
    for c in trimmed.chars() {
        if c == ' ' && last_was_space {
            continue;
        }
        last_was_space = c == ' ';
        folded.push(c);
    }
    NormalizedValue::from_bytes(folded.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> NormalizedValue {
        CaseExactMatchingRule::new()
            .normalize(&AttributeValue::from(raw))
            .expect("case-exact normalization is total")
    }

    fn norm_str(raw: &str) -> String {
        String::from_utf8(norm(raw).as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_trims_and_collapses_interior_runs() {
        assert_eq!(norm_str("  John   Smith  "), "John Smith");
    }

    #[test]
    fn test_all_spaces_becomes_single_space() {
        assert_eq!(norm_str("   "), " ");
        assert_eq!(norm_str(" "), " ");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(norm_str(""), "");
        assert!(norm("").is_empty());
    }

    #[test]
    fn test_all_control_whitespace_becomes_single_space() {
        // Non-empty, trims to nothing: same branch as all-spaces.
        assert_eq!(norm_str("\t\r\n"), " ");
    }

    #[test]
    fn test_no_interior_whitespace_is_just_trimmed() {
        assert_eq!(norm_str("  cn=admin  "), "cn=admin");
        assert_eq!(norm_str("plain"), "plain");
    }

    #[test]
    fn test_multiple_runs_collapse_independently() {
        assert_eq!(norm_str("a  b   c    d"), "a b c d");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(norm_str("  MiXeD  CaSe "), "MiXeD CaSe");
        assert_ne!(norm("ABC"), norm("abc"));
    }

    #[test]
    fn test_interior_tabs_are_not_folded() {
        // Only the literal space participates in the fold.
        assert_eq!(norm_str("a\t\tb"), "a\t\tb");
        assert_ne!(norm("a\t\tb"), norm("a b"));
    }

    #[test]
    fn test_matches_after_normalization() {
        let rule = CaseExactMatchingRule::new();
        assert!(rule.matches(&norm("A  B"), &norm("A B")));
        assert!(!rule.matches(&norm("A B"), &norm("a b")));
    }

    #[test]
    fn test_matches_is_reflexive_and_symmetric() {
        let rule = CaseExactMatchingRule::new();
        let a = norm("ou=People");
        let b = norm("ou=People");
        assert!(rule.matches(&a, &a));
        assert!(rule.matches(&a, &b));
        assert!(rule.matches(&b, &a));
    }

    #[test]
    fn test_idempotent_on_examples() {
        for raw in ["  John   Smith  ", "   ", "", "a\t\tb", "x  y"] {
            let once = norm(raw);
            let twice = CaseExactMatchingRule::new()
                .normalize(&AttributeValue::from_bytes(once.as_bytes().to_vec()))
                .unwrap();
            assert_eq!(once, twice, "re-normalizing {raw:?} changed the bytes");
        }
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let rule = CaseExactMatchingRule::new();
        let raw = AttributeValue::from_bytes(vec![b'a', 0xff, b'b']);
        let n = rule.normalize(&raw).unwrap();
        // 0xff becomes U+FFFD; the result is valid UTF-8 and stable.
        assert_eq!(n.as_bytes(), "a\u{FFFD}b".as_bytes());
        let again = rule
            .normalize(&AttributeValue::from_bytes(n.as_bytes().to_vec()))
            .unwrap();
        assert_eq!(n, again);
    }

    #[test]
    fn test_descriptor_identity() {
        let rule = CaseExactMatchingRule::new();
        assert_eq!(rule.descriptor().oid, "2.5.13.5");
        assert_eq!(rule.descriptor().name, Some("caseExactMatch"));
        assert_eq!(rule.syntax_oid(), DIRECTORY_STRING_SYNTAX_OID);
    }

    #[test]
    fn test_initialize_is_a_no_op() {
        let mut rule = CaseExactMatchingRule::new();
        assert!(rule.initialize(&crate::rule::RuleConfig::default()).is_ok());
    }
}
