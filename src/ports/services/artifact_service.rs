use async_trait::async_trait;

use crate::{
    domain::{
        models::{ArtifactUrls, DownloadOutcome, MetadataRecord, UploadResult},
        value_objects::Slug,
    },
    error::ClientResult,
};

/// Port for the figure hosting operations.
/// Each call is an independent request against the configured bucket.
#[async_trait]
pub trait ArtifactService: Send + Sync + 'static {
    /// In-memory figure type accepted and returned by the service
    type Figure: Send + Sync;

    /// List the slugs of all stored figures, sorted
    async fn list_artifacts(&self) -> ClientResult<Vec<Slug>>;

    /// Store a figure under `slug` (or a fresh UUID), with optional metadata
    async fn upload_artifact(
        &self,
        figure: &Self::Figure,
        slug: Option<Slug>,
        metadata: Option<MetadataRecord>,
    ) -> ClientResult<UploadResult>;

    /// Fetch a figure and whatever metadata is stored with it
    async fn download_artifact(&self, slug: &Slug)
        -> ClientResult<DownloadOutcome<Self::Figure>>;

    /// Remove a figure and its metadata
    async fn delete_artifact(&self, slug: &Slug) -> ClientResult<()>;

    /// Public URLs a figure has (or would have) under `slug`
    fn artifact_urls(&self, slug: &Slug) -> ArtifactUrls;
}
