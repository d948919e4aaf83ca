pub mod artifact_service_impl;

pub use artifact_service_impl::ArtifactStoreClient;
