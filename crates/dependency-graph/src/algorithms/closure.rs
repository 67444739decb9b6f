//! Dependency Closure Resolver
//!
//! Depth-first traversal from a set of roots, O(V + E) over the reachable
//! subgraph. The visited set doubles as the result.

use std::collections::HashSet;
use std::hash::Hash;

/// Compute every node reachable from `roots` through `neighbors`,
/// roots included.
///
/// The result is a set; any ordering is left to the caller.
pub fn resolve_closure<N, F, I>(roots: impl IntoIterator<Item = N>, mut neighbors: F) -> HashSet<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut stack: Vec<N> = Vec::new();

    for root in roots {
        if visited.insert(root.clone()) {
            stack.push(root);
        }
    }

    while let Some(node) = stack.pop() {
        for next in neighbors(&node) {
            if visited.insert(next.clone()) {
                stack.push(next);
            }
        }
    }

    visited
}

/// Same traversal with a fallible neighbor lookup.
///
/// The first lookup error aborts the traversal and is returned as-is.
pub fn try_resolve_closure<N, F, I, E>(
    roots: impl IntoIterator<Item = N>,
    mut neighbors: F,
) -> Result<HashSet<N>, E>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> Result<I, E>,
    I: IntoIterator<Item = N>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut stack: Vec<N> = Vec::new();

    for root in roots {
        if visited.insert(root.clone()) {
            stack.push(root);
        }
    }

    while let Some(node) = stack.pop() {
        for next in neighbors(&node)? {
            if visited.insert(next.clone()) {
                stack.push(next);
            }
        }
    }

    Ok(visited)
}
