//! Entity metadata model
//!
//! Minimal view of the ORM's mapping metadata: entities, their primary-key
//! columns and their outgoing relationships. Only what is needed to decide
//! which relationships are load-bearing dependencies.

use super::errors::GraphError;
use super::value_objects::EntityName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Relationship from one entity to another, expressed as column lists
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Property name on the owning entity
    pub name: String,
    /// Entity at the other end
    pub target: EntityName,
    /// Columns on the owning entity
    pub source_columns: Vec<String>,
    /// Columns on the target entity
    pub target_columns: Vec<String>,
}

impl Relationship {
    pub fn new<S, T>(
        name: impl Into<String>,
        target: impl Into<EntityName>,
        source_columns: impl IntoIterator<Item = S>,
        target_columns: impl IntoIterator<Item = T>,
    ) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            target: target.into(),
            source_columns: source_columns.into_iter().map(Into::into).collect(),
            target_columns: target_columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether rows of `target` cannot exist without the `source` row.
    ///
    /// True when the relationship leaves from the source's primary key and
    /// lands on something other than the target's primary key. A primary
    /// key mapped onto a primary key only aliases the same row.
    pub fn is_dependency(&self, source: &EntityDescriptor, target: &EntityDescriptor) -> bool {
        same_columns(&self.source_columns, &source.primary_key)
            && !same_columns(&self.target_columns, &target.primary_key)
    }
}

/// Mapping of one entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub name: EntityName,
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl EntityDescriptor {
    pub fn new<S: Into<String>>(
        name: impl Into<EntityName>,
        primary_key: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            primary_key: primary_key.into_iter().map(Into::into).collect(),
            relationships: Vec::new(),
        }
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }
}

/// Column lists compare as sets
fn same_columns(a: &[String], b: &[String]) -> bool {
    let a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = b.iter().map(String::as_str).collect();
    a == b
}

#[derive(Serialize, Deserialize)]
struct ModelDocument {
    entities: Vec<EntityDescriptor>,
}

/// Registry of mapped entities in declaration order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "ModelDocument", into = "ModelDocument")]
pub struct EntityModel {
    entities: Vec<EntityDescriptor>,
    index: HashMap<EntityName, usize>,
}

impl EntityModel {
    /// Build a model, rejecting duplicate names and relationships that
    /// point at unmapped entities.
    pub fn new(entities: Vec<EntityDescriptor>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            if index.insert(entity.name.clone(), position).is_some() {
                return Err(GraphError::InvalidModel(format!(
                    "entity {} mapped twice",
                    entity.name
                )));
            }
        }

        for entity in &entities {
            if entity.primary_key.is_empty() {
                return Err(GraphError::InvalidModel(format!(
                    "entity {} has no primary key",
                    entity.name
                )));
            }
            for relationship in &entity.relationships {
                if !index.contains_key(&relationship.target) {
                    return Err(GraphError::unmapped(relationship.target.as_str()));
                }
            }
        }

        Ok(Self { entities, index })
    }

    /// Load a model from its JSON form: `{"entities": [...]}`
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::InvalidModel(e.to_string()))
    }

    /// Look up an entity by name
    pub fn entity(&self, name: &str) -> Result<&EntityDescriptor, GraphError> {
        self.index
            .get(name)
            .map(|&position| &self.entities[position])
            .ok_or_else(|| GraphError::unmapped(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of an entity in declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// All entities in declaration order
    pub fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities that must be managed together with `name`, in relationship
    /// declaration order.
    pub fn dependents(&self, name: &str) -> Result<Vec<EntityName>, GraphError> {
        let source = self.entity(name)?;
        let mut dependents = Vec::new();
        for relationship in &source.relationships {
            let target = self.entity(relationship.target.as_str())?;
            if relationship.is_dependency(source, target) && !dependents.contains(&target.name) {
                dependents.push(target.name.clone());
            }
        }
        Ok(dependents)
    }
}

impl TryFrom<ModelDocument> for EntityModel {
    type Error = GraphError;

    fn try_from(document: ModelDocument) -> Result<Self, Self::Error> {
        Self::new(document.entities)
    }
}

impl From<EntityModel> for ModelDocument {
    fn from(model: EntityModel) -> Self {
        Self {
            entities: model.entities,
        }
    }
}
