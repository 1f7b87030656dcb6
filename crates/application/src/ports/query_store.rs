use async_trait::async_trait;
use fanout_dns_domain::{DomainError, Lookup, Query, RecordType};
use uuid::Uuid;

/// Capability interface over Query persistence, implemented by each storage
/// backend and selected once at process start.
///
/// `create_lookup` is invoked concurrently, once per resolver, against the
/// same Query id; an implementation must never lose, duplicate, or corrupt
/// an append regardless of interleaving.
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Inserts a new Query with no lookups. The id and created_at fields
    /// are assigned by the store, never by the caller.
    async fn create_query(&self, record_type: RecordType, name: &str)
        -> Result<Query, DomainError>;

    /// Retrieves a Query by id. Returns `DomainError::QueryNotFound` if it
    /// does not exist; it may have existed once and expired out of the
    /// backend, which is a normal outcome and not a fault.
    async fn get_query_by_id(&self, id: Uuid) -> Result<Query, DomainError>;

    /// Updates a Query. Only `finished_at` is propagated; every other field
    /// is ignored even if populated. Returns `DomainError::QueryNotFound`
    /// if the id does not exist.
    async fn update_query(&self, query: &Query) -> Result<(), DomainError>;

    /// Appends one Lookup under the identified Query. Returns
    /// `DomainError::QueryNotFound` if the id does not exist.
    async fn create_lookup(&self, query_id: Uuid, lookup: Lookup) -> Result<(), DomainError>;
}
