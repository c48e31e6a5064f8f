//! # Error Types — Matching Rule Failure Modes
//!
//! Defines the error types of the value-comparison core. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Lifecycle failure carries an explicit tag distinguishing
//!   configuration-caused failure from other setup failure, so callers
//!   branch on the variant instead of matching on error text.
//! - Syntax violations name the syntax the value was checked against.
//! - Nothing here is retried internally; all errors propagate to the
//!   schema registry / comparison pipeline that invoked the rule.

use thiserror::Error;

/// Error from a matching rule's one-time initialization hook.
///
/// Raised only at registration time. Rules with no setup requirement
/// (such as the case-exact rule) never produce either variant, but the
/// contract keeps both available for rule kinds that do require setup.
#[derive(Error, Debug)]
pub enum RuleLifecycleError {
    /// The supplied configuration cannot be satisfied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Setup failed for a reason other than configuration.
    #[error("initialization error: {0}")]
    Initialization(String),
}

/// A raw value is not well-formed for the syntax its attribute is bound to.
///
/// Produced by `normalize()` on rule variants that validate structure
/// before canonicalizing. The case-exact rule accepts any byte sequence
/// and never produces this error.
#[derive(Error, Debug)]
#[error("value violates syntax {syntax_oid}: {detail}")]
pub struct SyntaxViolation {
    /// OID of the syntax the value failed to conform to.
    pub syntax_oid: &'static str,
    /// Human-readable description of the violation.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_error_display_distinguishes_kinds() {
        let c = RuleLifecycleError::Configuration("missing locale".into());
        let i = RuleLifecycleError::Initialization("collator unavailable".into());
        assert_eq!(c.to_string(), "configuration error: missing locale");
        assert_eq!(i.to_string(), "initialization error: collator unavailable");
    }

    #[test]
    fn test_syntax_violation_names_the_syntax() {
        let e = SyntaxViolation {
            syntax_oid: "1.3.6.1.4.1.1466.115.121.1.44",
            detail: "underscore is not a printable character".into(),
        };
        let s = e.to_string();
        assert!(s.contains("1.3.6.1.4.1.1466.115.121.1.44"));
        assert!(s.contains("underscore"));
    }
}
