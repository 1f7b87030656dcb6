use super::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Where Query documents are stored between requests. Exactly one backend
/// must be configured.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileStorageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisStorageConfig>,
}

/// A local JSON file holding every Query in one document. Suitable for
/// small deployments; throughput is bounded by a single lock.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    /// Path of the JSON file. Created if it does not exist.
    pub path: String,
}

/// A Redis server (with the JSON module) holding one document per Query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisStorageConfig {
    /// `host:port` of the Redis server.
    pub addr: String,

    /// Database index to use (default: 0).
    #[serde(default)]
    pub db: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.file, &self.redis) {
            (Some(_), Some(_)) => Err(ConfigError::invalid(
                "storage",
                "only one storage backend can be configured at once",
            )),
            (Some(file), None) => file.validate(),
            (None, Some(redis)) => redis.validate(),
            (None, None) => Err(ConfigError::invalid(
                "storage",
                "a file or redis storage backend is required",
            )),
        }
    }
}

impl FileStorageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_empty() {
            return Err(ConfigError::invalid(
                "storage.file.path",
                "path to local file is required",
            ));
        }
        Ok(())
    }
}

impl RedisStorageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.addr.is_empty() {
            return Err(ConfigError::invalid(
                "storage.redis.addr",
                "redis server address is required",
            ));
        }
        if self.db < 0 {
            return Err(ConfigError::invalid(
                "storage.redis.db",
                "redis database index must be zero or greater",
            ));
        }
        Ok(())
    }
}
