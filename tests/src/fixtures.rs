//! Shared entity models

use dependency_graph::{EntityDescriptor, EntityModel, GraphError, Relationship};

/// Four tables plus the join table between P3T1 and P3T4.
///
/// P3T1 owns P3T2, P3T3 and its P3T1_T4 rows; P3T4 owns its P3T1_T4 rows.
pub const P3_MODEL_JSON: &str = r#"{
    "entities": [
        {
            "name": "P3T1",
            "primary_key": ["id"],
            "relationships": [
                { "name": "t2s", "target": "P3T2", "source_columns": ["id"], "target_columns": ["p3t1_id"] },
                { "name": "t3s", "target": "P3T3", "source_columns": ["id"], "target_columns": ["p3t1_id"] },
                { "name": "links", "target": "P3T1_T4", "source_columns": ["id"], "target_columns": ["p3t1_id"] }
            ]
        },
        {
            "name": "P3T2",
            "primary_key": ["id"],
            "relationships": [
                { "name": "owner", "target": "P3T1", "source_columns": ["p3t1_id"], "target_columns": ["id"] }
            ]
        },
        {
            "name": "P3T3",
            "primary_key": ["id"],
            "relationships": [
                { "name": "owner", "target": "P3T1", "source_columns": ["p3t1_id"], "target_columns": ["id"] }
            ]
        },
        {
            "name": "P3T4",
            "primary_key": ["id"],
            "relationships": [
                { "name": "links", "target": "P3T1_T4", "source_columns": ["id"], "target_columns": ["p3t4_id"] }
            ]
        },
        {
            "name": "P3T1_T4",
            "primary_key": ["p3t1_id", "p3t4_id"],
            "relationships": [
                { "name": "t1", "target": "P3T1", "source_columns": ["p3t1_id"], "target_columns": ["id"] },
                { "name": "t4", "target": "P3T4", "source_columns": ["p3t4_id"], "target_columns": ["id"] }
            ]
        }
    ]
}"#;

pub fn p3_model() -> Result<EntityModel, GraphError> {
    EntityModel::from_json(P3_MODEL_JSON)
}

/// `e0` owns `e1`, which owns `e2`, and so on.
///
/// Declared leaf-first so that insert ordering has real work to do.
pub fn chain_model(length: usize) -> Result<EntityModel, GraphError> {
    let entities = (0..length)
        .rev()
        .map(|i| {
            let entity = EntityDescriptor::new(format!("e{i}"), ["id"]);
            if i + 1 < length {
                entity.with_relationship(Relationship::new(
                    "children",
                    format!("e{}", i + 1),
                    ["id"],
                    ["parent_id"],
                ))
            } else {
                entity
            }
        })
        .collect();
    EntityModel::new(entities)
}
