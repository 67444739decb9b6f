//! Configuration for dependency graph resolution

use serde::{Deserialize, Serialize};
use std::env;

/// Graph resolution limits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum nodes accepted by a single resolve or sort call
    pub max_node_count: usize,
    /// Maximum constraints accepted by a single sort call
    pub max_edge_count: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_node_count: 1000,
            max_edge_count: 10_000,
        }
    }
}

impl GraphConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DEPGRAPH_MAX_NODES`: Node limit (default: 1000)
    /// - `DEPGRAPH_MAX_EDGES`: Constraint limit (default: 10000)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_node_count: env::var("DEPGRAPH_MAX_NODES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_node_count),

            max_edge_count: env::var("DEPGRAPH_MAX_EDGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_edge_count),
        }
    }
}
