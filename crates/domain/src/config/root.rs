use super::errors::ConfigError;
use super::listen::ListenConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSION: u32 = 1;

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

/// Structure of the TOML configuration file given to fanout-dns at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Revision of this configuration structure (default: 1).
    #[serde(default = "default_version")]
    pub version: u32,

    pub listen: ListenConfig,

    /// Upstream DNS resolvers every Query is fanned out to. At least one.
    #[serde(default)]
    pub resolvers: Vec<ResolverConfig>,

    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_VERSION {
            return Err(ConfigError::invalid("version", "unsupported config version"));
        }

        if self.listen.addr.is_empty() {
            return Err(ConfigError::invalid("listen.addr", "addr to listen on is required"));
        }

        if self.resolvers.is_empty() {
            return Err(ConfigError::invalid(
                "resolvers",
                "at least one resolver is required",
            ));
        }
        for (i, resolver) in self.resolvers.iter().enumerate() {
            resolver.validate(&format!("resolvers[{i}]"))?;
        }

        self.storage.validate()
    }
}
