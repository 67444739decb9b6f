//! Insert Order Adapter
//!
//! Implements `InsertOrderProvider` with the constraint sorter: every
//! dependent entity is inserted after the entity it depends on.

use crate::algorithms::sort_by_constraints;
use crate::domain::errors::GraphError;
use crate::domain::value_objects::{AfterConstraint, EntityName};
use crate::ports::outbound::{EntityMetadata, InsertOrderProvider};
use std::collections::HashSet;
use tracing::debug;

/// Orders entities parents-first using their dependency relationships.
///
/// Entities are laid out in declaration order before sorting, so the
/// result is stable across runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintInsertOrder;

impl ConstraintInsertOrder {
    pub fn new() -> Self {
        Self
    }

    /// "Child after parent" for every dependency inside `entities`
    fn constraints(
        metadata: &dyn EntityMetadata,
        nodes: &[EntityName],
        entities: &HashSet<EntityName>,
    ) -> Result<Vec<AfterConstraint<EntityName>>, GraphError> {
        let mut constraints = Vec::new();
        for parent in nodes {
            for child in metadata.dependents(parent)? {
                if &child != parent && entities.contains(&child) {
                    constraints.push(AfterConstraint::new(child, parent.clone()));
                }
            }
        }
        Ok(constraints)
    }
}

impl InsertOrderProvider for ConstraintInsertOrder {
    fn insert_order(
        &self,
        metadata: &dyn EntityMetadata,
        entities: &HashSet<EntityName>,
    ) -> Result<Vec<EntityName>, GraphError> {
        let mut nodes: Vec<EntityName> = entities.iter().cloned().collect();
        nodes.sort_by(|a, b| {
            let pa = metadata.position(a).unwrap_or(usize::MAX);
            let pb = metadata.position(b).unwrap_or(usize::MAX);
            (pa, a).cmp(&(pb, b))
        });

        let constraints = Self::constraints(metadata, &nodes, entities)?;
        debug!(
            entities = nodes.len(),
            constraints = constraints.len(),
            "Computing insert order"
        );

        sort_by_constraints(nodes, &constraints)
    }
}
