//! Relational style access to graph databases: prepared queries with `?`
//! placeholders rendered into graph query literals, and forward only cursors
//! over the returned rows.
//!
//! Backends are implemented in separate driver crates, this crate exposes the
//! shared types and traits.
pub use graphrel_core::*;
