//! Constraint Graph Builder
//!
//! Turns a node list plus "runs after" constraints into a `ConstraintGraph`
//! over node indices.

use crate::domain::entities::ConstraintGraph;
use crate::domain::errors::GraphError;
use crate::domain::value_objects::AfterConstraint;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Map each identity to its position.
///
/// Fails on the first identity seen twice: an "after" reference to it
/// could not be resolved to a single node.
pub fn index_identities<I>(identities: &[I]) -> Result<HashMap<I, usize>, GraphError>
where
    I: Clone + Eq + Hash + Display,
{
    let mut index = HashMap::with_capacity(identities.len());
    for (position, identity) in identities.iter().enumerate() {
        if index.insert(identity.clone(), position).is_some() {
            return Err(GraphError::duplicate(identity));
        }
    }
    Ok(index)
}

/// Build the graph: one entry per node, one edge `later -> earlier` per
/// constraint whose both ends are in this batch.
///
/// Constraints naming a node outside the batch are dropped.
pub fn build_constraint_graph<I>(
    index: &HashMap<I, usize>,
    node_count: usize,
    constraints: &[AfterConstraint<I>],
) -> ConstraintGraph
where
    I: Eq + Hash,
{
    let mut graph = ConstraintGraph::with_nodes(node_count);

    for constraint in constraints {
        let (Some(&later), Some(&earlier)) =
            (index.get(&constraint.later), index.get(&constraint.earlier))
        else {
            continue;
        };
        graph.add_edge(later, earlier);
    }

    graph
}
