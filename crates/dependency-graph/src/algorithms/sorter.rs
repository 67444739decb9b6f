//! Constraint Topological Sorter
//!
//! Orders nodes so that every "X runs after Y" constraint places Y before X.

use super::constraint_builder::{build_constraint_graph, index_identities};
use super::kahns::kahns_topological_sort;
use crate::domain::errors::GraphError;
use crate::domain::value_objects::{AfterConstraint, Identified};
use tracing::debug;

/// Sort `nodes` so that every constraint's `earlier` precedes its `later`.
///
/// Zero or one node, or no constraints at all, return `nodes` untouched.
/// Otherwise identities must be unique, constraints naming a node outside
/// `nodes` are ignored, and a cycle fails with the identities that could
/// not be placed.
pub fn sort_by_constraints<N>(
    nodes: Vec<N>,
    constraints: &[AfterConstraint<N::Id>],
) -> Result<Vec<N>, GraphError>
where
    N: Identified,
{
    if nodes.len() <= 1 || constraints.is_empty() {
        return Ok(nodes);
    }

    let identities: Vec<N::Id> = nodes.iter().map(Identified::identity).collect();
    let index = index_identities(&identities)?;
    let graph = build_constraint_graph(&index, identities.len(), constraints);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Sorting constrained nodes"
    );

    let order = kahns_topological_sort(&graph).map_err(|unresolved| {
        GraphError::cycle(unresolved.0.iter().map(|&node| &identities[node]))
    })?;

    let mut slots: Vec<Option<N>> = nodes.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|node| slots[node].take())
        .collect())
}
