use fanout_dns_application::ports::QueryStore;
use fanout_dns_domain::config::StorageConfig;
use fanout_dns_domain::DomainError;
use fanout_dns_infrastructure::storage::{FileStore, RedisStore};
use std::sync::Arc;
use tracing::info;

/// Builds the one configured storage backend. Config validation has already
/// ruled out configuring zero or both.
pub async fn init_storage(config: &StorageConfig) -> Result<Arc<dyn QueryStore>, DomainError> {
    match (&config.file, &config.redis) {
        (Some(file), None) => {
            let store = FileStore::from_config(file).await?;
            info!(path = %file.path, "file storage backend ready");
            Ok(Arc::new(store))
        }
        (None, Some(redis)) => {
            let store = RedisStore::connect(redis).await?;
            info!(addr = %redis.addr, db = redis.db, "redis storage backend ready");
            Ok(Arc::new(store))
        }
        _ => Err(DomainError::StorageError(
            "no storage backend configured".to_string(),
        )),
    }
}
