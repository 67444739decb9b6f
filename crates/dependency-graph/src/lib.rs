//! # Dependency Graph
//!
//! Dependency closure resolution and constraint-based topological ordering.
//!
//! Two consumers drive it: test-fixture planning, which expands a set of
//! entity names into every entity whose rows depend on them, and listener
//! assembly, which orders listeners by their "runs after" declarations.
//!
//! ## Architecture
//!
//! - **Domain**: Value objects (EntityName, AfterConstraint), ConstraintGraph,
//!   FixturePlan, the entity metadata model, errors and invariants
//! - **Algorithms**: Closure resolver, constraint graph builder, Kahn's sort
//! - **Ports**: Inbound (DependencyGraphApi) and Outbound (EntityMetadata,
//!   InsertOrderProvider)
//! - **Adapters**: EntityModel metadata, ConstraintInsertOrder
//! - **Application**: Service orchestration

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::ConstraintInsertOrder;
pub use algorithms::{resolve_closure, sort_by_constraints, try_resolve_closure};
pub use application::service::DependencyGraphService;
pub use config::GraphConfig;
pub use domain::entities::*;
pub use domain::errors::GraphError;
pub use domain::metadata::{EntityDescriptor, EntityModel, Relationship};
pub use domain::value_objects::*;
pub use ports::inbound::DependencyGraphApi;
pub use ports::outbound::{EntityMetadata, InsertOrderProvider};
