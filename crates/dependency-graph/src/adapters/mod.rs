//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits over the in-memory entity model.

mod entity_model;
mod insert_order;

pub use insert_order::ConstraintInsertOrder;
