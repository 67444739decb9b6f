//! Value objects for dependency graph resolution

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Name of a mapped entity (table)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A node whose identity may differ from its value.
///
/// Two nodes are the same node if and only if their identities compare
/// equal. Entity names are their own identity; listener registrations are
/// identified by the listener's type.
pub trait Identified {
    type Id: Clone + Eq + Hash + fmt::Display;

    fn identity(&self) -> Self::Id;
}

impl Identified for EntityName {
    type Id = EntityName;

    fn identity(&self) -> EntityName {
        self.clone()
    }
}

/// Ordering constraint: `later` runs after `earlier`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AfterConstraint<I> {
    pub later: I,
    pub earlier: I,
}

impl<I> AfterConstraint<I> {
    pub fn new(later: I, earlier: I) -> Self {
        Self { later, earlier }
    }
}
