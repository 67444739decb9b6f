//! # Listener Pipeline
//!
//! Explicit listener registration with "runs after" declarations, ordered
//! through the dependency graph sorter.
//!
//! ```rust,ignore
//! let pipeline = ListenerRegistry::new()
//!     .with(Registration::new(AuditListener).after::<ValidationListener>())
//!     .with(Registration::new(ValidationListener).transactional(true))
//!     .assemble()?;
//!
//! pipeline.transactional.dispatch(&event).await?;
//! ```
//!
//! Listeners are identified by type. Registrations are split into a
//! transactional and a non-transactional chain and each chain is ordered on
//! its own; a constraint across chains has no effect.

pub mod chain;
pub mod errors;
pub mod listener;
pub mod registry;

pub use chain::{ListenerChain, ListenerPipeline};
pub use errors::{HandlerFailure, ListenerError};
pub use listener::{EventKind, Listener, ListenerEvent, ListenerType};
pub use registry::{ListenerRegistry, Registration, NON_TRANSACTIONAL_CHAIN, TRANSACTIONAL_CHAIN};
