use crate::{
    config::ConfigError,
    domain::errors::{StorageError, ValidationError},
    ports::codec::CodecError,
};

/// Errors surfaced by the artifact client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Figure codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Metadata serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
