use serde::Serialize;

use super::metadata::MetadataRecord;
use crate::domain::value_objects::Slug;

/// Public locations of a stored figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactUrls {
    /// Direct link to `<slug>.json`
    pub json_url: String,
    /// Direct link to `<slug>.meta.json`
    pub meta_url: String,
    /// Viewer page rendering the figure
    pub fig_url: String,
}

/// Result of uploading a figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    pub slug: Slug,
    pub json_url: String,
    pub fig_url: String,
    pub etag: Option<String>,
    /// Present only when a metadata record was stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_etag: Option<String>,
}

/// Result of downloading a figure
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome<F> {
    Found {
        artifact: F,
        metadata: Option<MetadataRecord>,
    },
    /// No `<slug>.json` object, whether or not metadata exists
    NotFound,
}

impl<F> DownloadOutcome<F> {
    pub fn is_found(&self) -> bool {
        matches!(self, DownloadOutcome::Found { .. })
    }
}
