use async_trait::async_trait;
use fanout_dns_application::ports::QueryStore;
use fanout_dns_domain::config::FileStorageConfig;
use fanout_dns_domain::{DomainError, Lookup, Query, RecordType};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

const FORMAT_VERSION: u32 = 1;

/// Layout of the local JSON file.
#[derive(Debug, Serialize, Deserialize)]
struct FileFormat {
    /// Revision of this format contained within the file.
    version: u32,

    /// Queries requested by users and their results.
    queries: Vec<Query>,
}

impl FileFormat {
    fn empty() -> Self {
        Self {
            version: FORMAT_VERSION,
            queries: Vec::new(),
        }
    }

    fn query_mut(&mut self, id: Uuid) -> Option<&mut Query> {
        self.queries.iter_mut().find(|q| q.id == id)
    }
}

/// QueryStore backed by a single local JSON document.
///
/// One exclusive lock serializes every operation's full read–mutate–write
/// cycle, which makes concurrent appends trivially safe at the cost of
/// O(total stored queries) per operation and one operation in flight at a
/// time. Suitable for small deployments only.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens a store at `path`. If the file does not exist, an empty
    /// document is written.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        store.init().await?;
        Ok(store)
    }

    pub async fn from_config(config: &FileStorageConfig) -> Result<Self, DomainError> {
        Self::open(config.path.clone()).await
    }

    async fn init(&self) -> Result<(), DomainError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("stat {}: {e}", self.path.display())))?;

        if !exists {
            self.write_document(&FileFormat::empty()).await?;
        }

        Ok(())
    }

    async fn read_document(&self) -> Result<FileFormat, DomainError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("read {}: {e}", self.path.display())))?;

        serde_json::from_slice(&raw).map_err(|e| DomainError::SerializationError(e.to_string()))
    }

    async fn write_document(&self, document: &FileFormat) -> Result<(), DomainError> {
        let raw = serde_json::to_vec(document)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| DomainError::IoError(format!("write {}: {e}", self.path.display())))
    }

    /// Runs `read` on the document under the store lock.
    async fn read<F, T>(&self, read: F) -> Result<T, DomainError>
    where
        F: FnOnce(&FileFormat) -> Result<T, DomainError>,
    {
        let _lock = self.lock.lock().await;
        let document = self.read_document().await?;
        read(&document)
    }

    /// Runs `mutate` on the document under the store lock, persisting the
    /// document if the mutation succeeds.
    async fn write<F, T>(&self, mutate: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut FileFormat) -> Result<T, DomainError>,
    {
        let _lock = self.lock.lock().await;
        let mut document = self.read_document().await?;
        let value = mutate(&mut document)?;
        self.write_document(&document).await?;
        Ok(value)
    }
}

#[async_trait]
impl QueryStore for FileStore {
    async fn create_query(
        &self,
        record_type: RecordType,
        name: &str,
    ) -> Result<Query, DomainError> {
        let query = Query::new(Uuid::now_v7(), record_type, name);
        let persisted = query.clone();

        self.write(move |document| {
            document.queries.push(query);
            Ok(())
        })
        .await?;

        Ok(persisted)
    }

    async fn get_query_by_id(&self, id: Uuid) -> Result<Query, DomainError> {
        self.read(|document| {
            document
                .queries
                .iter()
                .find(|q| q.id == id)
                .cloned()
                .ok_or(DomainError::QueryNotFound(id))
        })
        .await
    }

    async fn update_query(&self, query: &Query) -> Result<(), DomainError> {
        let id = query.id;
        let finished_at = query.finished_at;

        self.write(move |document| {
            let stored = document.query_mut(id).ok_or(DomainError::QueryNotFound(id))?;

            // Additive finalize: only finished_at propagates, and never back
            // to None.
            if finished_at.is_some() {
                stored.finished_at = finished_at;
            }

            Ok(())
        })
        .await
    }

    async fn create_lookup(&self, query_id: Uuid, lookup: Lookup) -> Result<(), DomainError> {
        self.write(move |document| {
            let stored = document
                .query_mut(query_id)
                .ok_or(DomainError::QueryNotFound(query_id))?;
            stored.lookups.push(lookup);
            Ok(())
        })
        .await
    }
}
