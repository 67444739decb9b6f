//! Ordered listener chains

use crate::errors::ListenerError;
use crate::listener::{ListenerEvent, ListenerType};
use crate::registry::Registration;
use graph_telemetry::{metric_inc, LISTENER_DISPATCHES};
use tracing::{debug, warn};

/// Listeners of one chain, in execution order
#[derive(Debug)]
pub struct ListenerChain {
    name: &'static str,
    registrations: Vec<Registration>,
}

impl ListenerChain {
    pub(crate) fn new(name: &'static str, registrations: Vec<Registration>) -> Self {
        Self {
            name,
            registrations,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Listener types in the order they run
    pub fn listener_types(&self) -> Vec<ListenerType> {
        self.registrations
            .iter()
            .map(Registration::listener_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Invoke every listener in order.
    ///
    /// The first failure stops the chain and is returned; listeners after
    /// it are not called.
    pub async fn dispatch(&self, event: &ListenerEvent) -> Result<(), ListenerError> {
        for registration in &self.registrations {
            let listener_type = registration.listener_type();
            debug!(
                chain = self.name,
                listener = %listener_type,
                kind = %event.kind,
                entity = %event.entity,
                "Dispatching event"
            );

            if let Err(source) = registration.listener().on_event(event).await {
                metric_inc!(LISTENER_DISPATCHES, &[self.name, "failed"]);
                warn!(
                    chain = self.name,
                    listener = %listener_type,
                    error = %source,
                    "Listener failed, stopping chain"
                );
                return Err(ListenerError::Handler {
                    listener: listener_type.name().to_string(),
                    source,
                });
            }
        }

        metric_inc!(LISTENER_DISPATCHES, &[self.name, "ok"]);
        Ok(())
    }
}

/// Both chains produced by one assembly
#[derive(Debug)]
pub struct ListenerPipeline {
    /// Runs inside the unit of work
    pub transactional: ListenerChain,
    /// Runs outside the unit of work
    pub non_transactional: ListenerChain,
}

impl ListenerPipeline {
    pub fn chain(&self, transactional: bool) -> &ListenerChain {
        if transactional {
            &self.transactional
        } else {
            &self.non_transactional
        }
    }
}
