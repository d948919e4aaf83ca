use object_store::{ObjectStore as ObjectStoreBackend, memory::InMemory};
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        codec::JsonCodec,
        storage::{ApacheObjectStoreAdapter, create_s3_store},
    },
    config::{ClientConfig, ConfigError, ConfigSource},
    domain::models::MetadataRecord,
    error::ClientResult,
    ports::{codec::FigureCodec, storage::ObjectStore},
    services::ArtifactStoreClient,
};

/// Storage backend configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// S3-compatible endpoint from the client configuration
    #[default]
    S3,
    /// Process-local store, for tests and dry runs
    InMemory,
}

/// Builder wiring a configuration, a storage backend and a codec into a client
pub struct ClientBuilder {
    config: ClientConfig,
    storage_backend: StorageBackend,
    default_metadata: Option<MetadataRecord>,
}

impl ClientBuilder {
    /// Create a new builder for a resolved configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            storage_backend: StorageBackend::default(),
            default_metadata: None,
        }
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.storage_backend = backend;
        self
    }

    /// Metadata reused by uploads that do not pass their own
    pub fn with_default_metadata(mut self, metadata: MetadataRecord) -> Self {
        self.default_metadata = Some(metadata);
        self
    }

    /// Build a client for JSON figures
    pub fn build(self) -> ClientResult<ArtifactStoreClient> {
        self.build_with_codec(JsonCodec::new())
    }

    /// Build a client using a custom figure codec
    pub fn build_with_codec<C: FigureCodec>(self, codec: C) -> ClientResult<ArtifactStoreClient<C>> {
        let store = self.create_store()?;

        let client = ArtifactStoreClient::new(self.config, store, codec);
        Ok(match self.default_metadata {
            Some(metadata) => client.with_default_metadata(metadata),
            None => client,
        })
    }

    /// Create the storage adapter based on configuration
    fn create_store(&self) -> ClientResult<Arc<dyn ObjectStore>> {
        let backend: Arc<dyn ObjectStoreBackend> = match self.storage_backend {
            StorageBackend::S3 => create_s3_store(&self.config)
                .map_err(|e| ConfigError::Backend(format!("{:#}", e)))?,
            StorageBackend::InMemory => Arc::new(InMemory::new()),
        };

        Ok(Arc::new(ApacheObjectStoreAdapter::new(backend)))
    }
}

/// Convenience functions for common configurations
///
/// Create an S3-backed client for JSON figures
pub fn create_s3_client(config: ClientConfig) -> ClientResult<ArtifactStoreClient> {
    ClientBuilder::new(config).build()
}

/// Create an in-memory client for testing and development
pub fn create_in_memory_client(config: ClientConfig) -> ClientResult<ArtifactStoreClient> {
    ClientBuilder::new(config)
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}

/// Create an S3-backed client from `AKHENATEN_*` environment variables
pub fn create_client_from_env() -> ClientResult<ArtifactStoreClient> {
    let config = ConfigSource::from_env()?.resolve()?;
    create_s3_client(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::services::ArtifactService;

    fn test_config() -> ClientConfig {
        ConfigSource::builder()
            .access_key("Xabc123")
            .secret_key("secret")
            .build()
            .resolve()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_in_memory_client() {
        let client = create_in_memory_client(test_config()).unwrap();
        assert!(client.list_artifacts().await.unwrap().is_empty());
        assert_eq!(client.config().bucket().as_str(), "babc123");
    }

    #[test]
    fn test_create_s3_client() {
        assert!(create_s3_client(test_config()).is_ok());
    }

    #[test]
    fn test_builder_carries_default_metadata() {
        let metadata = MetadataRecord::new("Test Plot", "Tester").unwrap();
        let client = ClientBuilder::new(test_config())
            .with_storage_backend(StorageBackend::InMemory)
            .with_default_metadata(metadata.clone())
            .build()
            .unwrap();

        assert_eq!(client.default_metadata(), Some(&metadata));
    }
}
