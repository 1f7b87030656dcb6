use async_trait::async_trait;
use fanout_dns_application::ports::QueryStore;
use fanout_dns_domain::config::RedisStorageConfig;
use fanout_dns_domain::{DomainError, Lookup, Query, RecordType};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, JsonAsyncCommands};
use tracing::debug;
use uuid::Uuid;

/// QueryStore backed by a Redis server with the JSON module.
///
/// One document per Query, addressed by a key derived from its id.
/// Concurrent lookup appends rely on Redis's server-side atomic
/// `JSON.ARRAPPEND`, and the finalize on a targeted `JSON.SET`, so resolver
/// tasks need no client-side coordination.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects and validates the connection with a PING.
    pub async fn connect(config: &RedisStorageConfig) -> Result<Self, DomainError> {
        let (host, port) = split_host_port(&config.addr)?;

        let info = redis::ConnectionInfo {
            addr: redis::ConnectionAddr::Tcp(host, port),
            redis: redis::RedisConnectionInfo {
                db: config.db,
                username: config.username.clone(),
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = redis::Client::open(info)
            .map_err(|e| DomainError::StorageError(format!("redis: {e}")))?;

        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::StorageError(format!("could not connect to redis: {e}")))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::StorageError(format!("could not ping redis: {e}")))?;

        debug!(addr = %config.addr, db = config.db, "redis connection established");

        Ok(Self { conn })
    }

    fn key(id: Uuid) -> String {
        format!("fanout:query:{id}")
    }

    async fn ensure_exists(&self, key: &str, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(key).await.map_err(storage_error)?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::QueryNotFound(id))
        }
    }
}

fn storage_error(e: redis::RedisError) -> DomainError {
    DomainError::StorageError(e.to_string())
}

fn split_host_port(addr: &str) -> Result<(String, u16), DomainError> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| DomainError::StorageError(format!("redis address {addr:?} has no port")))?;

    let port: u16 = port
        .parse()
        .map_err(|_| DomainError::StorageError(format!("invalid redis port in {addr:?}")))?;

    Ok((host.trim_matches(['[', ']']).to_string(), port))
}

#[async_trait]
impl QueryStore for RedisStore {
    async fn create_query(
        &self,
        record_type: RecordType,
        name: &str,
    ) -> Result<Query, DomainError> {
        let query = Query::new(Uuid::now_v7(), record_type, name);

        let mut conn = self.conn.clone();
        conn.json_set::<_, _, _, ()>(Self::key(query.id), "$", &query)
            .await
            .map_err(storage_error)?;

        Ok(query)
    }

    async fn get_query_by_id(&self, id: Uuid) -> Result<Query, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .json_get(Self::key(id), "$")
            .await
            .map_err(storage_error)?;

        let raw = raw.ok_or(DomainError::QueryNotFound(id))?;

        // JSON.GET with a `$` path wraps its matches in an array.
        let mut matches: Vec<Query> = serde_json::from_str(&raw)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        matches.pop().ok_or(DomainError::QueryNotFound(id))
    }

    async fn update_query(&self, query: &Query) -> Result<(), DomainError> {
        let key = Self::key(query.id);
        self.ensure_exists(&key, query.id).await?;

        // Additive finalize: only finished_at propagates.
        let Some(finished_at) = query.finished_at else {
            return Ok(());
        };

        let mut conn = self.conn.clone();
        conn.json_set::<_, _, _, ()>(key, "$.finishedAt", &finished_at)
            .await
            .map_err(storage_error)
    }

    async fn create_lookup(&self, query_id: Uuid, lookup: Lookup) -> Result<(), DomainError> {
        let key = Self::key(query_id);
        self.ensure_exists(&key, query_id).await?;

        let mut conn = self.conn.clone();
        conn.json_arr_append::<_, _, _, redis::Value>(key, "$.lookups", &lookup)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
