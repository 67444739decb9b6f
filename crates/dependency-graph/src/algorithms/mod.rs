//! Algorithms module for dependency graph resolution
//!
//! Contains:
//! - Dependency closure resolver
//! - Constraint graph builder
//! - Kahn's topological sort (stack variant)
//! - Constraint sorter

pub mod closure;
pub mod constraint_builder;
pub mod kahns;
pub mod sorter;

pub use closure::{resolve_closure, try_resolve_closure};
pub use constraint_builder::{build_constraint_graph, index_identities};
pub use kahns::{kahns_topological_sort, UnresolvedNodes};
pub use sorter::sort_by_constraints;
