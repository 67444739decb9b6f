//! Dependency Graph Service
//!
//! Main service implementing DependencyGraphApi.

use crate::algorithms::{resolve_closure, sort_by_constraints, try_resolve_closure};
use crate::config::GraphConfig;
use crate::domain::entities::FixturePlan;
use crate::domain::errors::GraphError;
use crate::domain::value_objects::{AfterConstraint, EntityName, Identified};
use crate::ports::inbound::DependencyGraphApi;
use crate::ports::outbound::{EntityMetadata, InsertOrderProvider};
use graph_telemetry::{
    metric_inc, metric_observe, HistogramTimer, CLOSURES_RESOLVED, CLOSURE_SIZE,
    SORTS_PERFORMED, SORT_DURATION,
};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, info, warn};

/// Dependency Graph Service
///
/// Wraps the closure resolver and the constraint sorter with:
/// 1. Size limits from `GraphConfig`
/// 2. Structured logging
/// 3. Prometheus metrics
pub struct DependencyGraphService {
    config: GraphConfig,
}

impl DependencyGraphService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn check_node_count(&self, count: usize) -> Result<(), GraphError> {
        if count > self.config.max_node_count {
            return Err(GraphError::TooManyNodes {
                count,
                max: self.config.max_node_count,
            });
        }
        Ok(())
    }

    fn check_edge_count(&self, count: usize) -> Result<(), GraphError> {
        if count > self.config.max_edge_count {
            return Err(GraphError::TooManyEdges {
                count,
                max: self.config.max_edge_count,
            });
        }
        Ok(())
    }

    fn record_closure<N>(&self, closure: &HashSet<N>) -> Result<(), GraphError> {
        self.check_node_count(closure.len())?;
        metric_inc!(CLOSURES_RESOLVED);
        metric_observe!(CLOSURE_SIZE, closure.len() as f64);
        Ok(())
    }
}

impl Default for DependencyGraphService {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphApi for DependencyGraphService {
    fn resolve_closure<N, F, I>(&self, roots: Vec<N>, neighbors: F) -> Result<HashSet<N>, GraphError>
    where
        N: Clone + Eq + Hash,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>,
    {
        let root_count = roots.len();
        let closure = resolve_closure(roots, neighbors);
        self.record_closure(&closure)?;

        debug!(roots = root_count, resolved = closure.len(), "Resolved closure");
        Ok(closure)
    }

    fn sort<N>(
        &self,
        nodes: Vec<N>,
        constraints: &[AfterConstraint<N::Id>],
    ) -> Result<Vec<N>, GraphError>
    where
        N: Identified,
    {
        let node_count = nodes.len();
        let result = self
            .check_node_count(node_count)
            .and_then(|_| self.check_edge_count(constraints.len()))
            .and_then(|_| {
                let _timer = HistogramTimer::new(&SORT_DURATION);
                sort_by_constraints(nodes, constraints)
            });

        match &result {
            Ok(_) => {
                metric_inc!(SORTS_PERFORMED, &["ok"]);
                debug!(
                    nodes = node_count,
                    constraints = constraints.len(),
                    "Sorted nodes"
                );
            }
            Err(e) => {
                metric_inc!(SORTS_PERFORMED, &[e.reason()]);
                warn!(
                    nodes = node_count,
                    constraints = constraints.len(),
                    error = %e,
                    "Constraint sort failed"
                );
            }
        }

        result
    }

    fn resolve_entities(
        &self,
        metadata: &dyn EntityMetadata,
        names: &[&str],
    ) -> Result<HashSet<EntityName>, GraphError> {
        // 1. Validate every name before traversal
        let roots = names
            .iter()
            .map(|name| metadata.resolve(name))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(error = %e, "Rejected entity request"))?;

        // 2. Expand through dependency relationships
        let closure = try_resolve_closure(roots, |entity: &EntityName| metadata.dependents(entity))?;
        self.record_closure(&closure)?;

        info!(
            requested = names.len(),
            resolved = closure.len(),
            "Resolved entity closure"
        );
        Ok(closure)
    }

    fn plan_fixture(
        &self,
        metadata: &dyn EntityMetadata,
        orderer: &dyn InsertOrderProvider,
        names: &[&str],
    ) -> Result<FixturePlan, GraphError> {
        let entities = self.resolve_entities(metadata, names)?;
        let insert_order = orderer.insert_order(metadata, &entities)?;
        let plan = FixturePlan::new(entities, insert_order);

        info!(entities = plan.len(), "Fixture plan ready");
        Ok(plan)
    }
}
