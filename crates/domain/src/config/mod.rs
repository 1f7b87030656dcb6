//! Configuration for the fanout-dns process, one file per section:
//! - `root`: top-level structure, loading and validation
//! - `listen`: HTTP listener
//! - `resolver`: upstream resolver endpoints
//! - `storage`: storage backend selection (exactly one)
//! - `logging`: log level and format
//! - `errors`: configuration errors

pub mod errors;
pub mod listen;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod storage;

pub use errors::ConfigError;
pub use listen::ListenConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::Config;
pub use storage::{FileStorageConfig, RedisStorageConfig, StorageConfig};
