//! # Listener Assembly Flow
//!
//! Registration → per-chain ordering → dispatch of entity events.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use dependency_graph::{DependencyGraphService, GraphConfig, GraphError};
    use graph_telemetry::init_test_logging;
    use listener_pipeline::{
        EventKind, HandlerFailure, Listener, ListenerError, ListenerEvent, ListenerRegistry,
        ListenerType, Registration,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    type Journal = Arc<Mutex<Vec<String>>>;

    // =========================================================================
    // TEST LISTENERS
    // =========================================================================

    struct Validation(Journal);
    struct Audit(Journal);
    struct SearchIndex(Journal);
    struct CacheEviction(Journal);

    async fn record(journal: &Journal, listener: &str, event: &ListenerEvent) {
        // yield so ordering does not depend on the listeners being synchronous
        tokio::time::sleep(Duration::from_millis(1)).await;
        journal
            .lock()
            .await
            .push(format!("{listener}:{}:{}", event.kind, event.entity));
    }

    #[async_trait]
    impl Listener for Validation {
        async fn on_event(&self, event: &ListenerEvent) -> Result<(), HandlerFailure> {
            if event.entity.as_str().is_empty() {
                return Err("entity name missing".into());
            }
            record(&self.0, "validation", event).await;
            Ok(())
        }
    }

    #[async_trait]
    impl Listener for Audit {
        async fn on_event(&self, event: &ListenerEvent) -> Result<(), HandlerFailure> {
            record(&self.0, "audit", event).await;
            Ok(())
        }
    }

    #[async_trait]
    impl Listener for SearchIndex {
        async fn on_event(&self, event: &ListenerEvent) -> Result<(), HandlerFailure> {
            record(&self.0, "search", event).await;
            Ok(())
        }
    }

    #[async_trait]
    impl Listener for CacheEviction {
        async fn on_event(&self, event: &ListenerEvent) -> Result<(), HandlerFailure> {
            record(&self.0, "cache", event).await;
            Ok(())
        }
    }

    fn registry(journal: &Journal) -> ListenerRegistry {
        let mut registry = ListenerRegistry::new();
        registry
            .register(
                Registration::new(Audit(journal.clone()))
                    .transactional(true)
                    .after::<Validation>(),
            )
            .register(Registration::new(CacheEviction(journal.clone())).after::<SearchIndex>())
            .register(Registration::new(Validation(journal.clone())).transactional(true))
            .register(Registration::new(SearchIndex(journal.clone())));
        registry
    }

    #[tokio::test]
    async fn test_both_chains_dispatch_in_declared_order() -> anyhow::Result<()> {
        init_test_logging();
        let journal = Journal::default();
        let pipeline = registry(&journal).assemble()?;

        assert_eq!(
            pipeline.transactional.listener_types(),
            vec![ListenerType::of::<Validation>(), ListenerType::of::<Audit>()]
        );
        assert_eq!(
            pipeline.non_transactional.listener_types(),
            vec![ListenerType::of::<SearchIndex>(), ListenerType::of::<CacheEviction>()]
        );

        let event = ListenerEvent::new(EventKind::Update, "orders");
        pipeline.chain(true).dispatch(&event).await?;
        pipeline.chain(false).dispatch(&event).await?;

        assert_eq!(
            *journal.lock().await,
            vec![
                "validation:update:orders",
                "audit:update:orders",
                "search:update:orders",
                "cache:update:orders",
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_stops_transactional_chain() -> anyhow::Result<()> {
        let journal = Journal::default();
        let pipeline = registry(&journal).assemble()?;

        let err = pipeline
            .transactional
            .dispatch(&ListenerEvent::new(EventKind::Insert, ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ListenerError::Handler { .. }));
        assert!(journal.lock().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_pipeline_shared_across_tasks() -> anyhow::Result<()> {
        let journal = Journal::default();
        let pipeline = Arc::new(registry(&journal).assemble()?);

        let handles: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|entity| {
                let pipeline = pipeline.clone();
                tokio::spawn(async move {
                    pipeline
                        .non_transactional
                        .dispatch(&ListenerEvent::new(EventKind::Delete, entity))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await??;
        }

        let journal = journal.lock().await;
        assert_eq!(journal.len(), 6);
        for entity in ["a", "b", "c"] {
            let search = journal
                .iter()
                .position(|line| line == &format!("search:delete:{entity}"));
            let cache = journal
                .iter()
                .position(|line| line == &format!("cache:delete:{entity}"));
            assert!(search < cache);
        }
        Ok(())
    }

    #[test]
    fn test_contradictory_declarations_rejected() {
        let journal = Journal::default();
        let result = ListenerRegistry::new()
            .with(Registration::new(Audit(journal.clone())).after::<SearchIndex>())
            .with(Registration::new(SearchIndex(journal.clone())).after::<CacheEviction>())
            .with(Registration::new(CacheEviction(journal.clone())).after::<Audit>())
            .with(Registration::new(Validation(journal.clone())))
            .assemble();

        match result {
            Err(ListenerError::Assembly(GraphError::CycleDetected { unresolved })) => {
                assert_eq!(unresolved.len(), 3);
                assert!(!unresolved.iter().any(|name| name.ends_with("Validation")));
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_limits_apply_to_each_chain() {
        let journal = Journal::default();
        let service = DependencyGraphService::with_config(GraphConfig {
            max_node_count: 2,
            ..GraphConfig::default()
        });

        assert!(registry(&journal).assemble_with(&service).is_ok());

        let result = registry(&journal)
            .with(Registration::new(Validation(journal.clone())))
            .assemble_with(&service);
        assert!(matches!(
            result,
            Err(ListenerError::Assembly(GraphError::TooManyNodes { count: 3, max: 2 }))
        ));
    }
}
