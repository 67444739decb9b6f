//! Error types for listener assembly and dispatch

use dependency_graph::GraphError;
use thiserror::Error;

/// Failure returned by a listener callback
pub type HandlerFailure = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ListenerError {
    /// Registrations could not be ordered (duplicate type, cycle, limits)
    #[error("Listener assembly failed: {0}")]
    Assembly(#[from] GraphError),

    /// A listener callback failed; later listeners in the chain did not run
    #[error("Listener {listener} failed: {source}")]
    Handler {
        listener: String,
        #[source]
        source: HandlerFailure,
    },
}
