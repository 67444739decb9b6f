//! Listener contract and identity

use crate::errors::HandlerFailure;
use async_trait::async_trait;
use dependency_graph::EntityName;
use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a listener: its concrete Rust type.
///
/// Two instances of one type are the same listener as far as ordering is
/// concerned.
#[derive(Clone, Copy, Debug)]
pub struct ListenerType {
    id: TypeId,
    name: &'static str,
}

impl ListenerType {
    pub fn of<L: 'static>() -> Self {
        Self {
            id: TypeId::of::<L>(),
            name: type_name::<L>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ListenerType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ListenerType {}

impl Hash for ListenerType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ListenerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Entity lifecycle event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerEvent {
    pub kind: EventKind,
    pub entity: EntityName,
}

impl ListenerEvent {
    pub fn new(kind: EventKind, entity: impl Into<EntityName>) -> Self {
        Self {
            kind,
            entity: entity.into(),
        }
    }
}

/// Callback invoked for every entity event on its chain
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    async fn on_event(&self, event: &ListenerEvent) -> Result<(), HandlerFailure>;
}
