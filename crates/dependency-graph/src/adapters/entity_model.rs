//! Entity Metadata Adapter
//!
//! Implements the `EntityMetadata` port over an in-memory `EntityModel`.

use crate::algorithms::try_resolve_closure;
use crate::domain::errors::GraphError;
use crate::domain::metadata::EntityModel;
use crate::domain::value_objects::EntityName;
use crate::ports::outbound::EntityMetadata;
use std::collections::HashSet;
use tracing::debug;

impl EntityMetadata for EntityModel {
    fn resolve(&self, name: &str) -> Result<EntityName, GraphError> {
        self.entity(name).map(|entity| entity.name.clone())
    }

    fn dependents(&self, entity: &EntityName) -> Result<Vec<EntityName>, GraphError> {
        EntityModel::dependents(self, entity.as_str())
    }

    fn position(&self, entity: &EntityName) -> Option<usize> {
        EntityModel::position(self, entity.as_str())
    }
}

impl EntityModel {
    /// Every entity that must be managed together with `names`.
    ///
    /// All names are checked first; an unmapped one fails before any
    /// traversal happens.
    pub fn resolve_names<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<HashSet<EntityName>, GraphError> {
        let roots = names
            .iter()
            .map(|name| EntityMetadata::resolve(self, name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let closure = try_resolve_closure(roots, |entity: &EntityName| {
            EntityModel::dependents(self, entity.as_str())
        })?;

        debug!(
            requested = names.len(),
            resolved = closure.len(),
            "Resolved entity closure"
        );
        Ok(closure)
    }
}
