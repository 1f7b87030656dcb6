#![allow(dead_code)]

use async_trait::async_trait;
use fanout_dns_application::ports::{DnsExchanger, ExchangeOutcome, QueryStore};
use fanout_dns_domain::{DomainError, Lookup, Query, Record, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

// ============================================================================
// Mock QueryStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockQueryStore {
    queries: Arc<RwLock<HashMap<Uuid, Query>>>,
    fail_updates: Arc<RwLock<bool>>,
    fail_lookups: Arc<RwLock<bool>>,
}

impl MockQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every update_query call fail with a storage error.
    pub async fn set_fail_updates(&self, fail: bool) {
        *self.fail_updates.write().await = fail;
    }

    /// Makes every create_lookup call fail with a storage error.
    pub async fn set_fail_lookups(&self, fail: bool) {
        *self.fail_lookups.write().await = fail;
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl QueryStore for MockQueryStore {
    async fn create_query(
        &self,
        record_type: RecordType,
        name: &str,
    ) -> Result<Query, DomainError> {
        let query = Query::new(Uuid::now_v7(), record_type, name);
        self.queries.write().await.insert(query.id, query.clone());
        Ok(query)
    }

    async fn get_query_by_id(&self, id: Uuid) -> Result<Query, DomainError> {
        self.queries
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DomainError::QueryNotFound(id))
    }

    async fn update_query(&self, query: &Query) -> Result<(), DomainError> {
        if *self.fail_updates.read().await {
            return Err(DomainError::StorageError("mock update failure".to_string()));
        }

        let mut queries = self.queries.write().await;
        let stored = queries
            .get_mut(&query.id)
            .ok_or(DomainError::QueryNotFound(query.id))?;
        stored.finished_at = query.finished_at;
        Ok(())
    }

    async fn create_lookup(&self, query_id: Uuid, lookup: Lookup) -> Result<(), DomainError> {
        if *self.fail_lookups.read().await {
            return Err(DomainError::StorageError("mock lookup failure".to_string()));
        }

        let mut queries = self.queries.write().await;
        let stored = queries
            .get_mut(&query_id)
            .ok_or(DomainError::QueryNotFound(query_id))?;
        stored.lookups.push(lookup);
        Ok(())
    }
}

// ============================================================================
// Mock DnsExchanger
// ============================================================================

/// What a scripted resolver does when exchanged with.
#[derive(Clone)]
pub enum ScriptedExchange {
    /// Completes with NOERROR and the given records.
    Answer { rtt_ms: u64, records: Vec<Record> },
    /// Completes with a non-success rcode and no records.
    Rcode { rtt_ms: u64, rcode: &'static str },
    /// Fails at the transport level.
    TransportFailure,
    /// Never answers; the fan-out deadline has to reap it.
    Hang,
}

#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    script: Arc<RwLock<HashMap<SocketAddr, ScriptedExchange>>>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn script(&self, server: SocketAddr, exchange: ScriptedExchange) {
        self.script.write().await.insert(server, exchange);
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        _name: &str,
        _record_type: RecordType,
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<ExchangeOutcome, DomainError> {
        let scripted = self.script.read().await.get(&server).cloned();

        match scripted {
            Some(ScriptedExchange::Answer { rtt_ms, records }) => Ok(ExchangeOutcome {
                rcode: "NOERROR".to_string(),
                records,
                rtt: Duration::from_millis(rtt_ms),
            }),
            Some(ScriptedExchange::Rcode { rtt_ms, rcode }) => Ok(ExchangeOutcome {
                rcode: rcode.to_string(),
                records: Vec::new(),
                rtt: Duration::from_millis(rtt_ms),
            }),
            Some(ScriptedExchange::TransportFailure) => Err(DomainError::TransportFailed {
                server: server.to_string(),
                message: "connection refused".to_string(),
            }),
            Some(ScriptedExchange::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            }
            None => Err(DomainError::TransportFailed {
                server: server.to_string(),
                message: "no scripted response".to_string(),
            }),
        }
    }
}
