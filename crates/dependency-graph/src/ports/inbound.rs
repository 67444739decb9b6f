//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::FixturePlan;
use crate::domain::errors::GraphError;
use crate::domain::value_objects::{AfterConstraint, EntityName, Identified};
use crate::ports::outbound::{EntityMetadata, InsertOrderProvider};
use std::collections::HashSet;
use std::hash::Hash;

/// Primary dependency graph API
pub trait DependencyGraphApi: Send + Sync {
    /// Every node reachable from `roots` through `neighbors`, roots included.
    fn resolve_closure<N, F, I>(&self, roots: Vec<N>, neighbors: F) -> Result<HashSet<N>, GraphError>
    where
        N: Clone + Eq + Hash,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>;

    /// One total order of `nodes` honoring every "runs after" constraint.
    ///
    /// Fails on duplicate identities and on cycles.
    fn sort<N>(
        &self,
        nodes: Vec<N>,
        constraints: &[AfterConstraint<N::Id>],
    ) -> Result<Vec<N>, GraphError>
    where
        N: Identified;

    /// Validate entity names against the metadata, then expand them to
    /// their dependency closure.
    ///
    /// All names are checked before any traversal starts.
    fn resolve_entities(
        &self,
        metadata: &dyn EntityMetadata,
        names: &[&str],
    ) -> Result<HashSet<EntityName>, GraphError>;

    /// Closure plus insert/delete order for a test fixture.
    fn plan_fixture(
        &self,
        metadata: &dyn EntityMetadata,
        orderer: &dyn InsertOrderProvider,
        names: &[&str],
    ) -> Result<FixturePlan, GraphError>;
}
