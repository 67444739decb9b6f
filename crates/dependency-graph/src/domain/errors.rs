//! Error types for dependency graph resolution

use thiserror::Error;

/// All errors that can occur while resolving or ordering a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Caller named an entity or type the metadata does not know
    #[error("Not mapped: {name}")]
    UnmappedIdentifier { name: String },

    /// Two input nodes share one identity
    #[error("Node identity is not unique: {identity}")]
    DuplicateIdentity { identity: String },

    /// The after-constraints form a cycle
    #[error("Cycle detected among: {}", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },

    /// Node count exceeded configured limit
    #[error("Node count exceeded: {count} > {max}")]
    TooManyNodes { count: usize, max: usize },

    /// Constraint/edge count exceeded configured limit
    #[error("Edge count exceeded: {count} > {max}")]
    TooManyEdges { count: usize, max: usize },

    /// Entity metadata failed to load or validate
    #[error("Invalid entity model: {0}")]
    InvalidModel(String),
}

impl GraphError {
    pub fn unmapped(name: impl Into<String>) -> Self {
        Self::UnmappedIdentifier { name: name.into() }
    }

    pub fn duplicate(identity: impl ToString) -> Self {
        Self::DuplicateIdentity {
            identity: identity.to_string(),
        }
    }

    pub fn cycle<I, S>(unresolved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self::CycleDetected {
            unresolved: unresolved.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Caller broke a precondition (unknown name, ambiguous identity, limits)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::UnmappedIdentifier { .. }
                | Self::DuplicateIdentity { .. }
                | Self::TooManyNodes { .. }
                | Self::TooManyEdges { .. }
        )
    }

    /// The supplied data does not form a valid graph
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Self::CycleDetected { .. } | Self::InvalidModel(_))
    }

    /// Short label used for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnmappedIdentifier { .. } => "unmapped_identifier",
            Self::DuplicateIdentity { .. } => "duplicate_identity",
            Self::CycleDetected { .. } => "cycle",
            Self::TooManyNodes { .. } | Self::TooManyEdges { .. } => "limit_exceeded",
            Self::InvalidModel(_) => "invalid_model",
        }
    }
}
