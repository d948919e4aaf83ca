use serde::Serialize;
use uuid::Uuid;

use super::object_key::{ARTIFACT_SUFFIX, METADATA_SUFFIX, ObjectKey};
use crate::domain::errors::ValidationError;

/// Identifier of a stored figure.
///
/// A slug is the stem of two object keys: `<slug>.json` for the figure and
/// `<slug>.meta.json` for its metadata. Input is normalized by stripping
/// trailing `.json` suffixes, so `"plot"` and `"plot.json"` name the same
/// artifact and a normalized slug never ends in `.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalize and validate a caller supplied slug
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let mut stem = value.as_str();
        while let Some(shorter) = stem.strip_suffix(ARTIFACT_SUFFIX) {
            stem = shorter;
        }

        if stem.is_empty() {
            return Err(ValidationError::EmptySlug);
        }

        // "<x>.meta" would store its figure under "<x>"'s metadata key
        if stem.ends_with(".meta") {
            return Err(ValidationError::SlugCollidesWithMetadataKey(
                stem.to_string(),
            ));
        }

        let slug = Self(stem.to_string());
        // Both derived keys must be valid; the metadata key is the longer one
        slug.artifact_key()?;
        slug.metadata_key()?;
        Ok(slug)
    }

    /// Generate a random UUID v4 slug
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of the figure object, `<slug>.json`
    pub fn artifact_key(&self) -> Result<ObjectKey, ValidationError> {
        ObjectKey::new(format!("{}{}", self.0, ARTIFACT_SUFFIX))
    }

    /// Key of the metadata object, `<slug>.meta.json`
    pub fn metadata_key(&self) -> Result<ObjectKey, ValidationError> {
        ObjectKey::new(format!("{}{}", self.0, METADATA_SUFFIX))
    }
}

impl std::str::FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::new(s)
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
