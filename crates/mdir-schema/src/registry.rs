//! # Matching Rule Registry
//!
//! Maps object identifiers and short names to matching-rule instances.
//! Registration is the trust boundary between configuration loading and
//! value comparison: a rule's `initialize` hook runs here, exactly once,
//! and only a rule that initialized successfully becomes resolvable.
//!
//! ## Lookup Semantics
//!
//! - OID lookup is exact.
//! - Name lookup folds ASCII case. LDAP short names are
//!   case-insensitive descriptors, so `caseexactmatch` and
//!   `caseExactMatch` resolve identically.
//!
//! Resolved rules are handed out as `Arc<dyn MatchingRule>`; the rule
//! operations are pure, so a single instance serves all callers without
//! synchronization.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use mdir_core::{CaseExactMatchingRule, MatchingRule, RuleConfig, RuleDescriptor,
    RuleLifecycleError};

/// Error during rule registration.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A rule with this OID is already registered.
    #[error("matching rule {oid} is already registered")]
    DuplicateOid {
        /// OID of the conflicting rule.
        oid: String,
    },

    /// A rule with this name is already registered.
    #[error("matching rule name '{name}' is already registered")]
    DuplicateName {
        /// Name of the conflicting rule (as declared, before case folding).
        name: String,
    },

    /// The rule's initialization hook failed.
    #[error("rule initialization failed: {0}")]
    Lifecycle(#[from] RuleLifecycleError),
}

/// Registry of matching rules, indexed by OID and by folded name.
#[derive(Default)]
pub struct MatchingRuleRegistry {
    by_oid: HashMap<&'static str, Arc<dyn MatchingRule>>,
    by_name: HashMap<String, Arc<dyn MatchingRule>>,
}

impl MatchingRuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with the stack's built-in rules under
    /// default configuration. Currently: `caseExactMatch`.
    pub fn with_default_rules() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(Box::new(CaseExactMatchingRule::new()), &RuleConfig::default())?;
        Ok(registry)
    }

    /// Register a rule, running its one-time `initialize` hook first.
    ///
    /// The rule becomes resolvable by OID and (when it has one) by name
    /// only after the hook succeeds.
    ///
    /// # Errors
    ///
    /// - `DuplicateOid` / `DuplicateName` when the identity is taken;
    ///   the existing registration is left untouched.
    /// - `Lifecycle` when `initialize` fails; the rule is not registered.
    pub fn register(
        &mut self,
        mut rule: Box<dyn MatchingRule>,
        config: &RuleConfig,
    ) -> Result<(), RegistryError> {
        let descriptor = *rule.descriptor();
        if self.by_oid.contains_key(descriptor.oid) {
            return Err(RegistryError::DuplicateOid {
                oid: descriptor.oid.to_string(),
            });
        }
        if let Some(name) = descriptor.name {
            if self.by_name.contains_key(&name.to_ascii_lowercase()) {
                return Err(RegistryError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }

        rule.initialize(config)?;

        let rule: Arc<dyn MatchingRule> = Arc::from(rule);
        if let Some(name) = descriptor.name {
            self.by_name.insert(name.to_ascii_lowercase(), Arc::clone(&rule));
        }
        self.by_oid.insert(descriptor.oid, rule);

        debug!(
            oid = descriptor.oid,
            name = descriptor.name.unwrap_or(""),
            syntax = descriptor.syntax_oid,
            "registered matching rule"
        );
        Ok(())
    }

    /// Resolve a rule by its object identifier.
    pub fn by_oid(&self, oid: &str) -> Option<Arc<dyn MatchingRule>> {
        self.by_oid.get(oid).cloned()
    }

    /// Resolve a rule by short name, ignoring ASCII case.
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn MatchingRule>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Descriptors of every registered rule, in no particular order.
    pub fn descriptors(&self) -> impl Iterator<Item = &RuleDescriptor> {
        self.by_oid.values().map(|rule| rule.descriptor())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.by_oid.len()
    }

    /// Returns true if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.by_oid.is_empty()
    }
}
