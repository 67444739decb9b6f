//! Outbound Ports (Driven Ports / SPI)
//!
//! What the resolver needs from the ORM metadata layer.

use crate::domain::errors::GraphError;
use crate::domain::value_objects::EntityName;
use std::collections::HashSet;

/// Entity metadata lookup
pub trait EntityMetadata: Send + Sync {
    /// Resolve a caller-supplied entity name.
    ///
    /// Fails with `GraphError::UnmappedIdentifier` when nothing is mapped
    /// under that name.
    fn resolve(&self, name: &str) -> Result<EntityName, GraphError>;

    /// Entities whose rows cannot exist without rows of `entity`.
    fn dependents(&self, entity: &EntityName) -> Result<Vec<EntityName>, GraphError>;

    /// Declaration position, when the metadata keeps one
    fn position(&self, _entity: &EntityName) -> Option<usize> {
        None
    }
}

/// Total insert order over a set of entities.
///
/// Usually owned by the ORM; delete order is always the exact reverse.
pub trait InsertOrderProvider: Send + Sync {
    fn insert_order(
        &self,
        metadata: &dyn EntityMetadata,
        entities: &HashSet<EntityName>,
    ) -> Result<Vec<EntityName>, GraphError>;
}
