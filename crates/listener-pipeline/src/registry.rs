//! Listener registration and assembly
//!
//! Registrations are collected explicitly, then split by the transactional
//! flag and ordered once per chain.

use crate::chain::{ListenerChain, ListenerPipeline};
use crate::errors::ListenerError;
use crate::listener::{Listener, ListenerType};
use dependency_graph::{AfterConstraint, DependencyGraphApi, DependencyGraphService, Identified};
use std::fmt;
use std::sync::Arc;
use tracing::info;

pub const TRANSACTIONAL_CHAIN: &str = "transactional";
pub const NON_TRANSACTIONAL_CHAIN: &str = "non_transactional";

/// One listener plus its ordering declarations
pub struct Registration {
    listener_type: ListenerType,
    listener: Arc<dyn Listener>,
    after: Vec<ListenerType>,
    transactional: bool,
}

impl Registration {
    /// Non-transactional registration with no ordering constraints
    pub fn new<L: Listener>(listener: L) -> Self {
        Self {
            listener_type: ListenerType::of::<L>(),
            listener: Arc::new(listener),
            after: Vec::new(),
            transactional: false,
        }
    }

    /// Run after the listener of type `T` on the same chain.
    ///
    /// A constraint naming a type that is not registered on the same chain
    /// is ignored.
    pub fn after<T: Listener>(mut self) -> Self {
        self.after.push(ListenerType::of::<T>());
        self
    }

    pub fn transactional(mut self, transactional: bool) -> Self {
        self.transactional = transactional;
        self
    }

    pub fn listener_type(&self) -> ListenerType {
        self.listener_type
    }

    pub fn listener(&self) -> &dyn Listener {
        self.listener.as_ref()
    }

    pub fn is_transactional(&self) -> bool {
        self.transactional
    }

    fn constraints(&self) -> impl Iterator<Item = AfterConstraint<ListenerType>> + '_ {
        self.after
            .iter()
            .map(move |&earlier| AfterConstraint::new(self.listener_type, earlier))
    }
}

impl Identified for Registration {
    type Id = ListenerType;

    fn identity(&self) -> ListenerType {
        self.listener_type
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("listener", &self.listener_type.name())
            .field(
                "after",
                &self.after.iter().map(ListenerType::name).collect::<Vec<_>>(),
            )
            .field("transactional", &self.transactional)
            .finish()
    }
}

/// Collected registrations, in registration order
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    registrations: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: Registration) -> &mut Self {
        self.registrations.push(registration);
        self
    }

    pub fn with(mut self, registration: Registration) -> Self {
        self.registrations.push(registration);
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Assemble with a default-configured graph service
    pub fn assemble(self) -> Result<ListenerPipeline, ListenerError> {
        self.assemble_with(&DependencyGraphService::new())
    }

    /// Split registrations into the two chains and order each one.
    ///
    /// Any ordering failure aborts the whole assembly.
    pub fn assemble_with<G>(self, graph: &G) -> Result<ListenerPipeline, ListenerError>
    where
        G: DependencyGraphApi,
    {
        let (transactional, non_transactional): (Vec<_>, Vec<_>) = self
            .registrations
            .into_iter()
            .partition(Registration::is_transactional);

        let pipeline = ListenerPipeline {
            transactional: order_chain(graph, TRANSACTIONAL_CHAIN, transactional)?,
            non_transactional: order_chain(graph, NON_TRANSACTIONAL_CHAIN, non_transactional)?,
        };

        info!(
            transactional = pipeline.transactional.len(),
            non_transactional = pipeline.non_transactional.len(),
            "Listener pipeline assembled"
        );
        Ok(pipeline)
    }
}

fn order_chain<G>(
    graph: &G,
    name: &'static str,
    registrations: Vec<Registration>,
) -> Result<ListenerChain, ListenerError>
where
    G: DependencyGraphApi,
{
    let constraints: Vec<AfterConstraint<ListenerType>> = registrations
        .iter()
        .flat_map(Registration::constraints)
        .collect();

    let ordered = graph.sort(registrations, &constraints)?;
    Ok(ListenerChain::new(name, ordered))
}
