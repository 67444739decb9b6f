//! Kahn's Topological Sort Algorithm (stack variant)
//!
//! O(V + E) complexity, detects cycles.
//!
//! The ready set is a LIFO stack rather than a queue. Initially ready
//! nodes are pushed in node order and newly ready nodes in adjacency
//! order; the most recently readied node is emitted first. This decides
//! the relative order of unconstrained nodes and must stay as is.

use crate::domain::entities::ConstraintGraph;
use tracing::debug;

/// Nodes left over when the graph has a cycle, in node order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedNodes(pub Vec<usize>);

/// Perform Kahn's topological sort on the constraint graph.
///
/// Edges read "from runs after to", so Kahn emits the last-to-run nodes
/// first; the emitted list is reversed before it is returned. The result
/// holds node indices with every `to` ahead of its `from`.
pub fn kahns_topological_sort(graph: &ConstraintGraph) -> Result<Vec<usize>, UnresolvedNodes> {
    let node_count = graph.node_count();

    // 1. In-degree: number of nodes that must run after this one
    let mut in_degree = graph.in_degrees();

    // 2. Seed the stack with zero in-degree nodes in node order
    let mut stack: Vec<usize> = (0..node_count)
        .filter(|&node| in_degree[node] == 0)
        .collect();

    // 3. Pop, emit, release neighbors
    let mut emitted: Vec<usize> = Vec::with_capacity(node_count);
    while let Some(node) = stack.pop() {
        emitted.push(node);
        for &neighbor in graph.neighbors(node) {
            in_degree[neighbor] -= 1;
            if in_degree[neighbor] == 0 {
                stack.push(neighbor);
            }
        }
    }

    // 4. Cycle detection: if not all nodes emitted, the rest sit on a cycle
    if emitted.len() != node_count {
        let unresolved: Vec<usize> = (0..node_count)
            .filter(|&node| in_degree[node] > 0)
            .collect();
        debug!(
            emitted = emitted.len(),
            unresolved = unresolved.len(),
            "Constraint graph has a cycle"
        );
        return Err(UnresolvedNodes(unresolved));
    }

    // 5. Reverse: earlier-running nodes first
    emitted.reverse();
    Ok(emitted)
}
