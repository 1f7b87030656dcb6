//! Storage-consistency flow: concurrent resolver completions through the
//! orchestrator must all survive in the single-document backend, including
//! across a reopen from disk.

#[path = "../common/mod.rs"]
mod common;

use common::endpoint;
use common::mocks::{ScriptedExchange, ScriptedExchanger};
use fanout_dns_application::ports::{QueryStore, ResolverEndpoint};
use fanout_dns_application::{CreateQueryUseCase, ShutdownCoordinator};
use fanout_dns_domain::{Record, RecordType};
use fanout_dns_infrastructure::storage::FileStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_simultaneous_resolver_completions_all_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("queries.json");

    let resolvers: Vec<ResolverEndpoint> = (1..=5)
        .map(|i| endpoint(&format!("resolver-{i}"), i))
        .collect();

    let exchanger = ScriptedExchanger::new();
    for resolver in &resolvers {
        // Zero delay: all five completions race into the store at once.
        exchanger
            .script(
                resolver.addr,
                ScriptedExchange::Answer {
                    rtt_ms: 0,
                    records: vec![Record::new(300, vec!["192.0.2.1".to_string()])],
                },
            )
            .await;
    }

    let query_id = {
        let store = Arc::new(FileStore::open(&path).await.unwrap());
        let shutdown = ShutdownCoordinator::new();
        let create = CreateQueryUseCase::new(
            Arc::clone(&store) as Arc<dyn QueryStore>,
            Arc::new(exchanger),
            resolvers.clone(),
            shutdown.clone(),
        )
        .with_fanout_timeout(Duration::from_millis(300));

        let query = create.execute(RecordType::A, "example.com").await.unwrap();
        shutdown.wait().await;
        query.id
    };

    // Nothing in memory any more; everything must come back from disk.
    let reopened = FileStore::open(&path).await.unwrap();
    let restored = reopened.get_query_by_id(query_id).await.unwrap();

    assert_eq!(restored.lookups.len(), resolvers.len(), "zero lost writes");
    for resolver in &resolvers {
        assert_eq!(
            restored
                .lookups
                .iter()
                .filter(|l| l.resolver == resolver.name)
                .count(),
            1,
            "{} retained exactly once",
            resolver.name
        );
    }
    assert!(restored.finished_at.is_some());
}

#[tokio::test]
async fn test_back_to_back_queries_are_isolated_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("queries.json")).await.unwrap());

    let resolver = endpoint("cloudflare", 1);
    let exchanger = ScriptedExchanger::new();
    exchanger
        .script(
            resolver.addr,
            ScriptedExchange::Answer {
                rtt_ms: 1,
                records: vec![Record::new(30, vec!["192.0.2.2".to_string()])],
            },
        )
        .await;

    let shutdown = ShutdownCoordinator::new();
    let create = CreateQueryUseCase::new(
        Arc::clone(&store) as Arc<dyn QueryStore>,
        Arc::new(exchanger),
        vec![resolver],
        shutdown.clone(),
    )
    .with_fanout_timeout(Duration::from_millis(300));

    let first = create.execute(RecordType::A, "one.example.com").await.unwrap();
    let second = create.execute(RecordType::TXT, "two.example.com").await.unwrap();
    shutdown.wait().await;

    let first = store.get_query_by_id(first.id).await.unwrap();
    let second = store.get_query_by_id(second.id).await.unwrap();

    assert_eq!(first.name, "one.example.com");
    assert_eq!(second.name, "two.example.com");
    assert_eq!(first.lookups.len(), 1);
    assert_eq!(second.lookups.len(), 1);
    assert!(first.finished_at.is_some());
    assert!(second.finished_at.is_some());
}
