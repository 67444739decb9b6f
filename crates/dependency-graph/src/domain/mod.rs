//! Domain module for dependency graph resolution
//!
//! Contains core entities, value objects, entity metadata, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod metadata;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use metadata::*;
pub use value_objects::*;
