use crate::ports::{DnsExchanger, QueryStore, ResolverEndpoint};
use crate::shutdown::{ShutdownCoordinator, WorkGuard};
use chrono::Utc;
use fanout_dns_domain::{validators, DomainError, Lookup, Query, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, error, warn};

/// Upper bound on one fan-out. Every resolution task of a Query shares this
/// one deadline, detached from the lifetime of the triggering request.
const FANOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Persists a new Query and fans it out to every configured resolver.
///
/// The caller gets the persisted Query back immediately; resolution runs in
/// detached tasks that outlive the triggering request and are tracked by the
/// `ShutdownCoordinator` until the finalize step has completed.
pub struct CreateQueryUseCase {
    store: Arc<dyn QueryStore>,
    exchanger: Arc<dyn DnsExchanger>,
    resolvers: Arc<[ResolverEndpoint]>,
    shutdown: ShutdownCoordinator,
    fanout_timeout: Duration,
}

impl CreateQueryUseCase {
    pub fn new(
        store: Arc<dyn QueryStore>,
        exchanger: Arc<dyn DnsExchanger>,
        resolvers: Vec<ResolverEndpoint>,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            store,
            exchanger,
            resolvers: resolvers.into(),
            shutdown,
            fanout_timeout: FANOUT_TIMEOUT,
        }
    }

    /// Overrides the shared fan-out deadline.
    pub fn with_fanout_timeout(mut self, timeout: Duration) -> Self {
        self.fanout_timeout = timeout;
        self
    }

    /// Persists a new Query, then launches one resolution task per
    /// configured resolver without blocking the caller. The returned Query
    /// has an id, an empty lookup list, and no finish timestamp yet.
    pub async fn execute(
        &self,
        record_type: RecordType,
        name: &str,
    ) -> Result<Query, DomainError> {
        validators::validate_query_name(name).map_err(DomainError::InvalidDomainName)?;

        let query = self.store.create_query(record_type, name).await?;

        // Registered before returning, deregistered only after finalize, so
        // the query's full lifetime counts as one unit of outstanding work.
        let guard = self.shutdown.register();

        let store = Arc::clone(&self.store);
        let exchanger = Arc::clone(&self.exchanger);
        let resolvers = Arc::clone(&self.resolvers);
        let timeout = self.fanout_timeout;
        let fanned_out = query.clone();
        tokio::spawn(Self::resolve_all(
            store, exchanger, resolvers, timeout, fanned_out, guard,
        ));

        Ok(query)
    }

    /// Runs one resolution task per resolver, joins all of them, then issues
    /// the single finalize update.
    async fn resolve_all(
        store: Arc<dyn QueryStore>,
        exchanger: Arc<dyn DnsExchanger>,
        resolvers: Arc<[ResolverEndpoint]>,
        timeout: Duration,
        query: Query,
        guard: WorkGuard,
    ) {
        let _guard = guard;
        let deadline = Instant::now() + timeout;

        let mut tasks = JoinSet::new();
        for resolver in resolvers.iter().cloned() {
            let store = Arc::clone(&store);
            let exchanger = Arc::clone(&exchanger);
            let id = query.id;
            let record_type = query.record_type;
            let name = query.name.clone();
            tasks.spawn(async move {
                Self::resolve(store, exchanger, resolver, id, record_type, name, deadline, timeout)
                    .await;
            });
        }

        // Full barrier: no partial finalize.
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!(query_id = %query.id, error = %e, "resolution task panicked");
            }
        }

        let mut finished = query;
        finished.finished_at = Some(Utc::now());

        // Logged only: an unpersisted finalize leaves the query permanently
        // in-flight from a reader's perspective.
        if let Err(e) = store.update_query(&finished).await {
            error!(
                query_id = %finished.id,
                error = %e,
                "could not update query"
            );
        }
    }

    /// Exchanges against one resolver and appends the outcome. A transport
    /// failure appends nothing; the resolver's contribution is omitted and
    /// visible only here in the logs.
    #[allow(clippy::too_many_arguments)]
    async fn resolve(
        store: Arc<dyn QueryStore>,
        exchanger: Arc<dyn DnsExchanger>,
        resolver: ResolverEndpoint,
        id: uuid::Uuid,
        record_type: RecordType,
        name: String,
        deadline: Instant,
        timeout: Duration,
    ) {
        debug!(query_id = %id, resolver = %resolver.name, "starting resolution");

        let exchange = exchanger.exchange(&name, record_type, resolver.addr, timeout);
        let outcome = match tokio::time::timeout_at(deadline, exchange).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                warn!(
                    query_id = %id,
                    resolver = %resolver.name,
                    error = %e,
                    "could not resolve query"
                );
                return;
            }
            Err(_) => {
                warn!(
                    query_id = %id,
                    resolver = %resolver.name,
                    "resolution deadline exceeded"
                );
                return;
            }
        };

        let rtt_ms = outcome.rtt.as_millis() as u64;
        let lookup = if outcome.is_success() {
            Lookup::answered(&resolver.name, rtt_ms, outcome.records)
        } else {
            Lookup::refused(&resolver.name, rtt_ms, outcome.rcode)
        };

        if let Err(e) = store.create_lookup(id, lookup).await {
            warn!(
                query_id = %id,
                resolver = %resolver.name,
                error = %e,
                "could not create lookup"
            );
        }

        debug!(query_id = %id, resolver = %resolver.name, "resolution complete");
    }
}
