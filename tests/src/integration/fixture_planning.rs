//! # Fixture Planning Flow
//!
//! Entity model → closure → insert/delete order, through the service facade.

#[cfg(test)]
mod tests {
    use crate::fixtures::{chain_model, p3_model};
    use dependency_graph::domain::invariants::{
        invariant_closure_contains_roots, invariant_closure_fixed_point, invariant_closure_minimal,
    };
    use dependency_graph::{
        ConstraintInsertOrder, DependencyGraphApi, DependencyGraphService, EntityName, GraphError,
    };
    use graph_telemetry::init_test_logging;
    use std::collections::HashSet;

    fn names(values: &[&str]) -> Vec<EntityName> {
        values.iter().copied().map(EntityName::from).collect()
    }

    #[test]
    fn test_p3t1_fixture() -> anyhow::Result<()> {
        init_test_logging();
        let model = p3_model()?;
        let service = DependencyGraphService::new();

        let plan = service.plan_fixture(&model, &ConstraintInsertOrder, &["P3T1"])?;

        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan.insert_order,
            names(&["P3T1", "P3T2", "P3T3", "P3T1_T4"])
        );
        assert_eq!(
            plan.delete_order,
            names(&["P3T1_T4", "P3T3", "P3T2", "P3T1"])
        );
        Ok(())
    }

    #[test]
    fn test_p3t4_fixture() -> anyhow::Result<()> {
        let model = p3_model()?;
        let service = DependencyGraphService::new();

        let plan = service.plan_fixture(&model, &ConstraintInsertOrder, &["P3T4"])?;

        assert_eq!(plan.insert_order, names(&["P3T4", "P3T1_T4"]));
        assert_eq!(plan.delete_order, names(&["P3T1_T4", "P3T4"]));
        Ok(())
    }

    #[test]
    fn test_combined_fixture_shares_join_table() -> anyhow::Result<()> {
        let model = p3_model()?;
        let service = DependencyGraphService::new();

        let plan = service.plan_fixture(&model, &ConstraintInsertOrder, &["P3T1", "P3T4"])?;

        assert_eq!(
            plan.insert_order,
            names(&["P3T1", "P3T2", "P3T3", "P3T4", "P3T1_T4"])
        );
        Ok(())
    }

    #[test]
    fn test_closure_invariants_hold() -> anyhow::Result<()> {
        let model = p3_model()?;
        let service = DependencyGraphService::new();
        let roots = names(&["P3T4"]);

        let closure = service.resolve_entities(&model, &["P3T4"])?;
        let neighbors = |entity: &EntityName| model.dependents(entity.as_str()).unwrap_or_default();

        assert!(invariant_closure_contains_roots(&closure, &roots));
        assert!(invariant_closure_fixed_point(&closure, neighbors));
        assert!(invariant_closure_minimal(&closure, &roots, neighbors));
        Ok(())
    }

    #[test]
    fn test_unmapped_entity_rejected() -> anyhow::Result<()> {
        let model = p3_model()?;
        let service = DependencyGraphService::new();

        let err = service
            .plan_fixture(&model, &ConstraintInsertOrder, &["P3T1", "P9T9"])
            .unwrap_err();

        assert_eq!(err, GraphError::unmapped("P9T9"));
        assert!(err.is_precondition());
        Ok(())
    }

    #[test]
    fn test_leaf_first_declaration_still_inserts_parents_first() -> anyhow::Result<()> {
        let model = chain_model(5)?;
        let service = DependencyGraphService::new();

        let plan = service.plan_fixture(&model, &ConstraintInsertOrder, &["e0"])?;

        assert_eq!(plan.insert_order, names(&["e0", "e1", "e2", "e3", "e4"]));
        Ok(())
    }

    #[test]
    fn test_middle_of_chain_skips_ancestors() -> anyhow::Result<()> {
        let model = chain_model(5)?;
        let service = DependencyGraphService::new();

        let closure = service.resolve_entities(&model, &["e2"])?;

        let expected: HashSet<EntityName> = names(&["e2", "e3", "e4"]).into_iter().collect();
        assert_eq!(closure, expected);
        Ok(())
    }

    #[test]
    fn test_plan_serializes() -> anyhow::Result<()> {
        let model = p3_model()?;
        let service = DependencyGraphService::new();

        let plan = service.plan_fixture(&model, &ConstraintInsertOrder, &["P3T4"])?;
        let json = serde_json::to_value(&plan)?;

        assert_eq!(json["insert_order"], serde_json::json!(["P3T4", "P3T1_T4"]));
        assert_eq!(json["delete_order"], serde_json::json!(["P3T1_T4", "P3T4"]));
        Ok(())
    }
}
