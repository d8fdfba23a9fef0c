//! Validation engine for bindlint callable contracts.
//!
//! Checks each scanner-discovered callable against its declared contract and
//! produces diagnostics:
//! - B001: not public (callable must be externally visible)
//! - B002: undocumented (doc string required but empty)
//! - B003: struct-field conflict (property-style callable requests call-shaped extras)
//! - B004: parameter shape (positional/named/default/type-exclusivity ordering rules)
//! - B005: parameter count (physical list vs declared + injected count)
//! - B006: injected type (trailing framework-supplied parameter has the wrong type)

pub mod catalog;
pub mod engine;
pub mod rules;
pub mod suppress;
pub mod types;
