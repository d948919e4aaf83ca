use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    adapters::outbound::codec::JsonCodec,
    config::ClientConfig,
    domain::{
        errors::StorageError,
        models::{ArtifactUrls, DownloadOutcome, MetadataRecord, UploadResult},
        value_objects::Slug,
    },
    error::ClientResult,
    ports::{
        codec::{FigureCodec, JSON_CONTENT_TYPE},
        services::ArtifactService,
        storage::ObjectStore,
    },
};

/// Client for a figure hosting bucket.
///
/// Holds the resolved configuration, the bucket-bound store and the figure
/// codec. Every operation is a short sequence of store calls; nothing is
/// cached and nothing is retried.
pub struct ArtifactStoreClient<C = JsonCodec> {
    config: ClientConfig,
    store: Arc<dyn ObjectStore>,
    codec: C,
    default_metadata: Option<MetadataRecord>,
}

impl<C: FigureCodec> ArtifactStoreClient<C> {
    /// Create a new client over a store bound to `config.bucket()`
    pub fn new(config: ClientConfig, store: Arc<dyn ObjectStore>, codec: C) -> Self {
        Self {
            config,
            store,
            codec,
            default_metadata: None,
        }
    }

    /// Metadata stored with every upload that does not bring its own
    pub fn with_default_metadata(mut self, metadata: MetadataRecord) -> Self {
        self.default_metadata = Some(metadata);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn default_metadata(&self) -> Option<&MetadataRecord> {
        self.default_metadata.as_ref()
    }

    /// Fetch and parse `<slug>.meta.json`; a missing object is no metadata
    async fn fetch_metadata(&self, slug: &Slug) -> ClientResult<Option<MetadataRecord>> {
        let key = slug.metadata_key()?;
        match self.store.get_object(&key).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(StorageError::ObjectNotFound { .. }) => {
                debug!(slug = %slug, "No metadata stored");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<C> ArtifactService for ArtifactStoreClient<C>
where
    C: FigureCodec,
    C::Figure: Send + Sync,
{
    type Figure = C::Figure;

    async fn list_artifacts(&self) -> ClientResult<Vec<Slug>> {
        let objects = self.store.list_objects().await?;

        let mut slugs = Vec::new();
        for object in objects {
            let Some(stem) = object.key.artifact_stem() else {
                continue;
            };

            // Only stems this client could have written round-trip unchanged
            match Slug::new(stem) {
                Ok(slug) if slug.as_str() == stem => slugs.push(slug),
                _ => warn!(key = %object.key, "Skipping object that does not map to a slug"),
            }
        }

        slugs.sort();
        debug!(bucket = %self.config.bucket(), count = slugs.len(), "Listed artifacts");
        Ok(slugs)
    }

    async fn upload_artifact(
        &self,
        figure: &Self::Figure,
        slug: Option<Slug>,
        metadata: Option<MetadataRecord>,
    ) -> ClientResult<UploadResult> {
        let slug = slug.unwrap_or_else(Slug::generate);
        let urls = self.config.artifact_urls(&slug);

        let data = self.codec.encode(figure)?;
        let receipt = self
            .store
            .put_object(&slug.artifact_key()?, data, Some(self.codec.content_type()))
            .await?;

        let metadata = metadata.or_else(|| self.default_metadata.clone());
        let (meta_url, meta_etag) = match metadata {
            Some(record) => {
                let body = serde_json::to_vec(&record)?;
                let meta_receipt = self
                    .store
                    .put_object(&slug.metadata_key()?, body, Some(JSON_CONTENT_TYPE))
                    .await?;
                (Some(urls.meta_url), meta_receipt.etag)
            }
            None => (None, None),
        };

        info!(
            bucket = %self.config.bucket(),
            slug = %slug,
            with_metadata = meta_url.is_some(),
            "Uploaded artifact"
        );

        Ok(UploadResult {
            slug,
            json_url: urls.json_url,
            fig_url: urls.fig_url,
            etag: receipt.etag,
            meta_url,
            meta_etag,
        })
    }

    async fn download_artifact(
        &self,
        slug: &Slug,
    ) -> ClientResult<DownloadOutcome<Self::Figure>> {
        // The figure decides found / not found; metadata is only read for a hit
        let bytes = match self.store.get_object(&slug.artifact_key()?).await {
            Ok(bytes) => bytes,
            Err(StorageError::ObjectNotFound { .. }) => {
                debug!(slug = %slug, "Artifact not found");
                return Ok(DownloadOutcome::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let artifact = self.codec.decode(&bytes)?;
        let metadata = self.fetch_metadata(slug).await?;
        Ok(DownloadOutcome::Found { artifact, metadata })
    }

    async fn delete_artifact(&self, slug: &Slug) -> ClientResult<()> {
        // No rollback: if the second delete fails the figure is already gone
        self.store.delete_object(&slug.artifact_key()?).await?;
        self.store.delete_object(&slug.metadata_key()?).await?;

        info!(bucket = %self.config.bucket(), slug = %slug, "Deleted artifact");
        Ok(())
    }

    fn artifact_urls(&self, slug: &Slug) -> ArtifactUrls {
        self.config.artifact_urls(slug)
    }
}
