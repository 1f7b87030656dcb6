//! Full fan-out flow against the file storage backend: create a Query,
//! let the resolution tasks land their lookups, read the finished document
//! back.

#[path = "../common/mod.rs"]
mod common;

use chrono::Utc;
use common::endpoint;
use common::mocks::{ScriptedExchange, ScriptedExchanger};
use fanout_dns_application::{CreateQueryUseCase, GetQueryUseCase, ShutdownCoordinator};
use fanout_dns_domain::{Record, RecordType};
use fanout_dns_infrastructure::storage::FileStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_one_resolver_answers_while_the_other_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("queries.json")).await.unwrap());

    let a = endpoint("a", 1);
    let b = endpoint("b", 2);

    let exchanger = ScriptedExchanger::new();
    exchanger
        .script(
            a.addr,
            ScriptedExchange::Answer {
                rtt_ms: 14,
                records: vec![Record::new(300, vec!["93.184.216.34".to_string()])],
            },
        )
        .await;
    exchanger.script(b.addr, ScriptedExchange::Hang).await;

    let shutdown = ShutdownCoordinator::new();
    let create = CreateQueryUseCase::new(
        Arc::clone(&store) as Arc<dyn fanout_dns_application::ports::QueryStore>,
        Arc::new(exchanger),
        vec![a, b],
        shutdown.clone(),
    )
    .with_fanout_timeout(Duration::from_millis(300));

    let started = Utc::now();
    let query = create.execute(RecordType::A, "example.com.").await.unwrap();
    assert!(query.lookups.is_empty());
    assert!(query.finished_at.is_none());

    shutdown.wait().await;

    let get = GetQueryUseCase::new(store);
    let finished = get.execute(query.id).await.unwrap();

    // Only "a" contributed; "b" timed out and left no trace in the Query.
    assert_eq!(finished.lookups.len(), 1);
    let lookup = &finished.lookups[0];
    assert_eq!(lookup.resolver, "a");
    assert!(lookup.error.is_none());
    assert_eq!(lookup.records.len(), 1);
    assert_eq!(lookup.records[0].ttl, 300);
    assert_eq!(lookup.records[0].content, vec!["93.184.216.34".to_string()]);

    let finished_at = finished.finished_at.expect("finalize must have landed");
    assert!(finished_at >= started);
    assert!(finished_at <= Utc::now());
}

#[tokio::test]
async fn test_mixed_outcomes_across_three_resolvers() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("queries.json")).await.unwrap());

    let answering = endpoint("cloudflare", 1);
    let negative = endpoint("google", 2);
    let unreachable = endpoint("quad9", 3);

    let exchanger = ScriptedExchanger::new();
    exchanger
        .script(
            answering.addr,
            ScriptedExchange::Answer {
                rtt_ms: 9,
                records: vec![Record::new(60, vec!["192.0.2.7".to_string()])],
            },
        )
        .await;
    exchanger
        .script(
            negative.addr,
            ScriptedExchange::Rcode {
                rtt_ms: 21,
                rcode: "NXDOMAIN",
            },
        )
        .await;
    exchanger
        .script(unreachable.addr, ScriptedExchange::TransportFailure)
        .await;

    let shutdown = ShutdownCoordinator::new();
    let create = CreateQueryUseCase::new(
        Arc::clone(&store) as Arc<dyn fanout_dns_application::ports::QueryStore>,
        Arc::new(exchanger),
        vec![answering, negative, unreachable],
        shutdown.clone(),
    )
    .with_fanout_timeout(Duration::from_millis(300));

    let query = create.execute(RecordType::A, "example.com").await.unwrap();
    shutdown.wait().await;

    let finished = GetQueryUseCase::new(store).execute(query.id).await.unwrap();

    // Transport failure contributes nothing; the other two land, in
    // whatever order they completed.
    assert_eq!(finished.lookups.len(), 2);
    assert!(finished.finished_at.is_some());

    let cloudflare = finished
        .lookups
        .iter()
        .find(|l| l.resolver == "cloudflare")
        .expect("cloudflare lookup");
    assert!(cloudflare.error.is_none());
    assert_eq!(cloudflare.records.len(), 1);

    let google = finished
        .lookups
        .iter()
        .find(|l| l.resolver == "google")
        .expect("google lookup");
    assert_eq!(google.error.as_deref(), Some("NXDOMAIN"));
    assert!(google.records.is_empty());

    assert!(!finished.lookups.iter().any(|l| l.resolver == "quad9"));
}
