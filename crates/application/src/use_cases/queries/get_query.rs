use crate::ports::QueryStore;
use fanout_dns_domain::{DomainError, Query};
use std::sync::Arc;
use uuid::Uuid;

/// Pass-through read of a Query by id. No caching, no side effects.
pub struct GetQueryUseCase {
    store: Arc<dyn QueryStore>,
}

impl GetQueryUseCase {
    pub fn new(store: Arc<dyn QueryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: Uuid) -> Result<Query, DomainError> {
        self.store.get_query_by_id(id).await
    }
}
