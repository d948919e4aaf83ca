mod artifact_service;

pub use artifact_service::ArtifactService;
