use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query not found: {0}")]
    QueryNotFound(Uuid),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Timeout waiting for response from {server}")]
    TransportTimeout { server: String },

    #[error("Transport error from {server}: {message}")]
    TransportFailed { server: String, message: String },

    #[error("I/O error: {0}")]
    IoError(String),
}
