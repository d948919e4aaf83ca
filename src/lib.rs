pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - value objects, records and results
pub use domain::{
    ArtifactUrls,
    BucketName,
    DomainValidationError,
    DownloadOutcome,
    MetadataRecord,
    ObjectKey,
    Slug,
    StorageError,
    UploadResult,
};

// Port types - interfaces for external systems
pub use ports::{ArtifactService, CodecError, FigureCodec, ObjectInfo, ObjectStore, PutReceipt};

// Service implementation
pub use services::ArtifactStoreClient;

// Configuration and errors
pub use config::{ClientConfig, ConfigError, ConfigSource, ViewerUrlStyle};
pub use error::{ClientError, ClientResult};

// Application factory
pub use app::{
    ClientBuilder, StorageBackend, create_client_from_env, create_in_memory_client,
    create_s3_client,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{codec::JsonCodec, storage::ApacheObjectStoreAdapter};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        ArtifactService, ArtifactStoreClient, ClientBuilder, ClientConfig, ClientError,
        ConfigSource, DownloadOutcome, JsonCodec, MetadataRecord, Slug, UploadResult,
        ViewerUrlStyle, create_client_from_env, create_in_memory_client, create_s3_client,
    };
}
