//! # mdir-schema — Matching Rule Registry
//!
//! The schema-facing side of value comparison: a registry that maps
//! matching-rule OIDs and short names to shared rule instances, and runs
//! each rule's one-time initialization hook before it becomes visible.
//!
//! Attribute-type definitions reference matching rules by OID or name;
//! the registry is where that reference resolves to the `MatchingRule`
//! implementation in `mdir-core`.
//!
//! ## Crate Policy
//!
//! - Depends on `mdir-core` internally, nothing else.
//! - The registry is built once at configuration-load time, then shared
//!   read-only; lookups hand out `Arc` clones.

pub mod registry;

pub use registry::{MatchingRuleRegistry, RegistryError};
