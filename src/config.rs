//! Client configuration.
//!
//! Values come from a [`ConfigSource`], usually explicit arguments layered
//! over [`ConfigSource::from_env`], and are resolved once into a
//! [`ClientConfig`]. Resolution is the only place a missing credential is
//! detected; a resolved config is always complete.

use bon::Builder;
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    errors::ValidationError,
    models::ArtifactUrls,
    value_objects::{BucketName, Slug},
};

/// Public storage host of the hosted service
pub const DEFAULT_ENDPOINT: &str = "s3.akhenaten.eu";

/// Region name the hosted service signs requests with
pub const DEFAULT_REGION: &str = "akhenaten";

/// Subdomain stripped from the storage host to get the viewer host
const STORAGE_SUBDOMAIN: &str = "s3.";

pub const ENV_ACCESS_KEY: &str = "AKHENATEN_ID";
pub const ENV_SECRET_KEY: &str = "AKHENATEN_KEY";
pub const ENV_BUCKET: &str = "AKHENATEN_BUCKET";
pub const ENV_ENDPOINT: &str = "AKHENATEN_ENDPOINT";
pub const ENV_REGION: &str = "AKHENATEN_REGION";
pub const ENV_VIEWER_STYLE: &str = "AKHENATEN_VIEWER_STYLE";
pub const ENV_INSECURE: &str = "AKHENATEN_INSECURE";

/// Configuration errors, raised before any request is made
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing access key (set AKHENATEN_ID or pass it explicitly)")]
    MissingAccessKey,

    #[error("Missing secret key (set AKHENATEN_KEY or pass it explicitly)")]
    MissingSecretKey,

    #[error("Invalid bucket name: {0}")]
    InvalidBucket(ValidationError),

    #[error("Invalid viewer URL style '{0}' (expected 'query' or 'path')")]
    InvalidViewerStyle(String),

    #[error("Failed to build storage backend: {0}")]
    Backend(String),
}

/// Shape of the viewer page URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerUrlStyle {
    /// `https://<viewer-host>/?bucket=<bucket>&slug=<slug>`
    #[default]
    Query,
    /// `https://<viewer-host>/<bucket>/<slug>`
    Path,
}

impl FromStr for ViewerUrlStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "query" => Ok(ViewerUrlStyle::Query),
            "path" => Ok(ViewerUrlStyle::Path),
            _ => Err(ConfigError::InvalidViewerStyle(s.to_string())),
        }
    }
}

impl fmt::Display for ViewerUrlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerUrlStyle::Query => write!(f, "query"),
            ViewerUrlStyle::Path => write!(f, "path"),
        }
    }
}

/// Unresolved configuration values; any of them may be missing
#[derive(Clone, Default, Builder)]
pub struct ConfigSource {
    #[builder(into)]
    pub access_key: Option<String>,
    #[builder(into)]
    pub secret_key: Option<String>,
    #[builder(into)]
    pub bucket: Option<String>,
    /// Storage host, optionally with an `http://` or `https://` scheme
    #[builder(into)]
    pub endpoint: Option<String>,
    #[builder(into)]
    pub region: Option<String>,
    pub viewer_style: Option<ViewerUrlStyle>,
    /// Talk plain HTTP to the store (local MinIO)
    pub insecure: Option<bool>,
}

impl ConfigSource {
    /// Read values from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read values through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let viewer_style = get(ENV_VIEWER_STYLE)
            .map(|value| value.parse::<ViewerUrlStyle>())
            .transpose()?;

        let insecure = get(ENV_INSECURE).map(|value| {
            let value = value.to_lowercase();
            value == "true" || value == "1"
        });

        Ok(Self {
            access_key: get(ENV_ACCESS_KEY),
            secret_key: get(ENV_SECRET_KEY),
            bucket: get(ENV_BUCKET),
            endpoint: get(ENV_ENDPOINT),
            region: get(ENV_REGION),
            viewer_style,
            insecure,
        })
    }

    /// Fill every value missing here from `fallback`
    pub fn or(self, fallback: ConfigSource) -> ConfigSource {
        ConfigSource {
            access_key: non_empty(self.access_key).or(fallback.access_key),
            secret_key: non_empty(self.secret_key).or(fallback.secret_key),
            bucket: non_empty(self.bucket).or(fallback.bucket),
            endpoint: non_empty(self.endpoint).or(fallback.endpoint),
            region: non_empty(self.region).or(fallback.region),
            viewer_style: self.viewer_style.or(fallback.viewer_style),
            insecure: self.insecure.or(fallback.insecure),
        }
    }

    /// Resolve into a complete configuration.
    ///
    /// Without an explicit bucket the account bucket is derived from the
    /// access key.
    pub fn resolve(self) -> Result<ClientConfig, ConfigError> {
        let access_key = non_empty(self.access_key).ok_or(ConfigError::MissingAccessKey)?;
        let secret_key = non_empty(self.secret_key).ok_or(ConfigError::MissingSecretKey)?;

        let bucket = match non_empty(self.bucket) {
            Some(bucket) => BucketName::new(bucket),
            None => BucketName::from_access_key(&access_key),
        }
        .map_err(ConfigError::InvalidBucket)?;

        let endpoint = non_empty(self.endpoint).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let (scheme_secure, host) = split_scheme(&endpoint);

        Ok(ClientConfig {
            host,
            region: non_empty(self.region).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key,
            secret_key,
            bucket,
            viewer_style: self.viewer_style.unwrap_or_default(),
            secure: match self.insecure {
                Some(insecure) => !insecure,
                None => scheme_secure.unwrap_or(true),
            },
        })
    }
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSource")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("viewer_style", &self.viewer_style)
            .field("insecure", &self.insecure)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Split an endpoint into (secure flag implied by its scheme, bare host)
fn split_scheme(endpoint: &str) -> (Option<bool>, String) {
    let (secure, rest) = if let Some(rest) = endpoint.strip_prefix("https://") {
        (Some(true), rest)
    } else if let Some(rest) = endpoint.strip_prefix("http://") {
        (Some(false), rest)
    } else {
        (None, endpoint)
    };
    (secure, rest.trim_end_matches('/').to_string())
}

/// Fully resolved client configuration
#[derive(Clone)]
pub struct ClientConfig {
    host: String,
    region: String,
    access_key: String,
    secret_key: String,
    bucket: BucketName,
    viewer_style: ViewerUrlStyle,
    secure: bool,
}

impl ClientConfig {
    /// Storage host without scheme, e.g. `s3.akhenaten.eu`
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub fn viewer_style(&self) -> ViewerUrlStyle {
        self.viewer_style
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Select the viewer URL shape
    pub fn with_viewer_style(mut self, viewer_style: ViewerUrlStyle) -> Self {
        self.viewer_style = viewer_style;
        self
    }

    fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// Base URL of the storage API, e.g. `https://s3.akhenaten.eu`
    pub fn endpoint_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }

    /// Viewer host: the storage host without its `s3.` subdomain
    pub fn viewer_host(&self) -> &str {
        self.host
            .strip_prefix(STORAGE_SUBDOMAIN)
            .unwrap_or(&self.host)
    }

    /// Public URLs of the objects stored under `slug`
    pub fn artifact_urls(&self, slug: &Slug) -> ArtifactUrls {
        let base = format!("{}/{}", self.endpoint_url(), self.bucket);
        let viewer = format!("{}://{}", self.scheme(), self.viewer_host());

        let fig_url = match self.viewer_style {
            ViewerUrlStyle::Query => format!("{}/?bucket={}&slug={}", viewer, self.bucket, slug),
            ViewerUrlStyle::Path => format!("{}/{}/{}", viewer, self.bucket, slug),
        };

        ArtifactUrls {
            json_url: format!("{}/{}.json", base, slug),
            meta_url: format!("{}/{}.meta.json", base, slug),
            fig_url,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("viewer_style", &self.viewer_style)
            .field("secure", &self.secure)
            .finish()
    }
}
