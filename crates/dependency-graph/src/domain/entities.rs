//! Core entities for dependency graph resolution

use super::value_objects::EntityName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Directed graph over node indices.
///
/// Node `i` is the `i`-th node handed to the builder; adjacency lists keep
/// insertion order since it decides tie-breaks in the sorter. An edge
/// `from -> to` reads "`from` runs after `to`".
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    /// Adjacency list: from -> [to, to, ...]
    adjacency: Vec<Vec<usize>>,
    /// Number of distinct edges
    edge_count: usize,
}

impl ConstraintGraph {
    /// Graph with `node_count` nodes and no edges
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Add an edge. Repeated edges are ignored; returns whether it was new.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if self.has_edge(from, to) {
            return false;
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        true
    }

    /// Check if an edge exists from -> to
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map(|neighbors| neighbors.contains(&to))
            .unwrap_or(false)
    }

    /// Outgoing neighbors in insertion order
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges pointing at each node
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.adjacency.len()];
        for neighbors in &self.adjacency {
            for &to in neighbors {
                in_degree[to] += 1;
            }
        }
        in_degree
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Entities a test fixture must manage, with their create/cleanup order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturePlan {
    /// Closure of the requested entities
    pub entities: HashSet<EntityName>,
    /// Order in which rows can be inserted
    pub insert_order: Vec<EntityName>,
    /// Exact reverse of `insert_order`
    pub delete_order: Vec<EntityName>,
}

impl FixturePlan {
    pub fn new(entities: HashSet<EntityName>, insert_order: Vec<EntityName>) -> Self {
        let delete_order = insert_order.iter().rev().cloned().collect();
        Self {
            entities,
            insert_order,
            delete_order,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
