//! # Matching Rule Contract — Descriptor, Trait, Configuration
//!
//! A matching rule is a named, OID-identified algorithm pair (normalize
//! plus compare) defining equivalence semantics for attribute values of
//! a given syntax. This module declares the rule identifiers, the
//! immutable per-rule metadata record, and the `MatchingRule` trait the
//! schema registry dispatches through.
//!
//! ## Identifier Policy
//!
//! Rule and syntax OIDs are the standard X.520 / RFC 4517 assignments,
//! declared once as `const` items. Descriptors are `const`-constructed
//! from them: immutable, process-wide, with no lazy initialization and
//! no initialization-order hazard.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RuleLifecycleError, SyntaxViolation};
use crate::value::{AttributeValue, NormalizedValue};

/// OID of the `caseExactMatch` equality matching rule (X.520, RFC 4517).
pub const CASE_EXACT_MATCH_OID: &str = "2.5.13.5";

/// Short name of the `caseExactMatch` rule.
pub const CASE_EXACT_MATCH_NAME: &str = "caseExactMatch";

/// OID of the Directory String attribute syntax (RFC 4517 §3.3.6).
pub const DIRECTORY_STRING_SYNTAX_OID: &str = "1.3.6.1.4.1.1466.115.121.1.15";

/// OID of the Printable String attribute syntax (RFC 4517 §3.3.29).
pub const PRINTABLE_STRING_SYNTAX_OID: &str = "1.3.6.1.4.1.1466.115.121.1.44";

/// Immutable identity and metadata of a matching rule.
///
/// One descriptor exists per rule kind, constructed in `const` context
/// and shared read-only for the lifetime of the process. The schema
/// registry uses the descriptor to index rules by OID and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RuleDescriptor {
    /// Short descriptive name, when the rule has one (LDAP names are
    /// case-insensitive descriptors).
    pub name: Option<&'static str>,
    /// Globally unique dotted object identifier of the rule.
    pub oid: &'static str,
    /// OID of the attribute syntax this rule is defined to operate over.
    pub syntax_oid: &'static str,
    /// Optional human-readable description.
    pub description: Option<&'static str>,
}

impl RuleDescriptor {
    /// Construct a descriptor. `const` so rule metadata can live in
    /// statics with no runtime setup.
    pub const fn new(
        name: Option<&'static str>,
        oid: &'static str,
        syntax_oid: &'static str,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            oid,
            syntax_oid,
            description,
        }
    }
}

impl fmt::Display for RuleDescriptor {
    /// Renders the RFC 4512 matching-rule description form, e.g.
    /// `( 2.5.13.5 NAME 'caseExactMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}", self.oid)?;
        if let Some(name) = self.name {
            write!(f, " NAME '{name}'")?;
        }
        if let Some(description) = self.description {
            write!(f, " DESC '{description}'")?;
        }
        write!(f, " SYNTAX {} )", self.syntax_oid)
    }
}

/// Per-rule options handed to `initialize()` by the configuration-loading
/// subsystem at registration time.
///
/// Stateless rules accept any configuration and ignore it. Rules that do
/// require setup (locale-aware collation, for instance) read their
/// options here and fail with `RuleLifecycleError::Configuration` when
/// an option cannot be satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Free-form option map; keys and interpretation are rule-specific.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// A matching rule: polymorphic dispatch surface for the schema registry.
///
/// Implementations are pure over their arguments: `normalize` and
/// `matches` hold no mutable state, block on nothing, and are safe to
/// call concurrently from any number of threads. `initialize` is invoked
/// exactly once, by the registry, before the rule becomes visible to
/// lookups.
pub trait MatchingRule: Send + Sync {
    /// Static identity and metadata of this rule.
    fn descriptor(&self) -> &RuleDescriptor;

    /// OID of the attribute syntax this rule operates over.
    fn syntax_oid(&self) -> &'static str {
        self.descriptor().syntax_oid
    }

    /// One-time lifecycle hook, run at registration. The default is a
    /// no-op that always succeeds; rules requiring setup override it and
    /// may fail with either lifecycle error kind.
    fn initialize(&mut self, _config: &RuleConfig) -> Result<(), RuleLifecycleError> {
        Ok(())
    }

    /// Canonicalize a raw value into its comparison-ready form.
    ///
    /// # Errors
    ///
    /// Returns `SyntaxViolation` if the raw value is structurally invalid
    /// for the rule's syntax. Rules over unrestricted syntaxes accept any
    /// byte sequence and never fail.
    fn normalize(&self, raw: &AttributeValue) -> Result<NormalizedValue, SyntaxViolation>;

    /// Byte-exact equality over two already-normalized values.
    ///
    /// Precondition: both arguments were produced by this rule's
    /// `normalize`. Defines an equivalence relation (reflexive,
    /// symmetric, transitive).
    fn matches(&self, a: &NormalizedValue, b: &NormalizedValue) -> bool;
}
