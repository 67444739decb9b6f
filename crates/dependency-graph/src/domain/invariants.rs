//! Domain invariants for closure resolution and constraint ordering
//!
//! Checks used by tests and debug assertions. Each returns `true` when the
//! invariant holds.

use super::value_objects::{AfterConstraint, Identified};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// INVARIANT-1: Closure contains the roots
pub fn invariant_closure_contains_roots<N>(closure: &HashSet<N>, roots: &[N]) -> bool
where
    N: Eq + Hash,
{
    roots.iter().all(|root| closure.contains(root))
}

/// INVARIANT-2: Closure is a fixed point.
/// Every neighbor of every member is itself a member.
pub fn invariant_closure_fixed_point<N, F, I>(closure: &HashSet<N>, mut neighbors: F) -> bool
where
    N: Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    closure
        .iter()
        .all(|node| neighbors(node).into_iter().all(|next| closure.contains(&next)))
}

/// INVARIANT-3: Closure is minimal.
/// Every member is reachable from some root.
pub fn invariant_closure_minimal<N, F, I>(closure: &HashSet<N>, roots: &[N], mut neighbors: F) -> bool
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut reached: HashSet<N> = HashSet::new();
    let mut stack: Vec<N> = roots.to_vec();

    while let Some(node) = stack.pop() {
        if !reached.insert(node.clone()) {
            continue;
        }
        for next in neighbors(&node) {
            stack.push(next);
        }
    }

    closure.iter().all(|node| reached.contains(node))
}

/// INVARIANT-4: Constraints respected.
/// For every constraint whose nodes are both present, `earlier` precedes `later`.
pub fn invariant_constraints_respected<N>(order: &[N], constraints: &[AfterConstraint<N::Id>]) -> bool
where
    N: Identified,
{
    let position: HashMap<N::Id, usize> = order
        .iter()
        .enumerate()
        .map(|(index, node)| (node.identity(), index))
        .collect();

    constraints.iter().all(|constraint| {
        match (position.get(&constraint.later), position.get(&constraint.earlier)) {
            (Some(later), Some(earlier)) => earlier < later,
            _ => true,
        }
    })
}

/// INVARIANT-5: Completeness.
/// The ordering is a permutation of the input.
pub fn invariant_completeness<N>(order: &[N], input: &[N]) -> bool
where
    N: Identified,
{
    if order.len() != input.len() {
        return false;
    }
    let ordered: HashSet<N::Id> = order.iter().map(Identified::identity).collect();
    let given: HashSet<N::Id> = input.iter().map(Identified::identity).collect();
    ordered == given
}
