//! # mdir-core — Foundational Types for the Meridian Directory Stack
//!
//! This crate is the bedrock of the Meridian Directory Stack's value
//! comparison machinery. It defines the types and rules that decide
//! whether two attribute values are equivalent: the semantics beneath
//! index key generation, equality filters, uniqueness constraints, and
//! modify-replace no-op detection. Every other crate in the workspace
//! depends on `mdir-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for value states.** `AttributeValue` (raw bytes
//!    as submitted) and `NormalizedValue` (canonical bytes) are distinct
//!    types. You cannot pass a raw value where a normalized one is
//!    expected, so "compared the un-normalized bytes" defects are
//!    impossible by construction.
//!
//! 2. **`NormalizedValue` has a sole construction path.** The only way to
//!    obtain one is through a matching rule's `normalize()`. The inner
//!    bytes are private and no public constructor exists.
//!
//! 3. **Rules are a closed set behind one trait.** `MatchingRule` gives
//!    the registry polymorphic dispatch over rule variants without
//!    inheritance; descriptors are `const`-constructed process-wide
//!    metadata with no initialization-order hazard.
//!
//! 4. **Pure functions only.** Normalization, comparison, and the
//!    printable-character predicate are stateless and total, safe under
//!    unbounded concurrency with no synchronization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mdir-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod case_exact;
pub mod error;
pub mod printable;
pub mod rule;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use case_exact::CaseExactMatchingRule;
pub use error::{RuleLifecycleError, SyntaxViolation};
pub use printable::{is_printable_char, is_printable_string};
pub use rule::{
    MatchingRule, RuleConfig, RuleDescriptor, CASE_EXACT_MATCH_NAME, CASE_EXACT_MATCH_OID,
    DIRECTORY_STRING_SYNTAX_OID, PRINTABLE_STRING_SYNTAX_OID,
};
pub use value::{AttributeValue, NormalizedValue};
