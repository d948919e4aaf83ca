//! S3 storage backend built with the object_store crate
//!
//! The backend is bound to the account bucket and talks path-style requests
//! to the configured endpoint, which is what MinIO-based hosts expect.

use anyhow::{Context, Result};
use object_store::{ObjectStore as ObjectStoreBackend, aws::AmazonS3Builder};
use std::sync::Arc;

use crate::config::ClientConfig;

/// Create an S3 store from configuration
pub fn create_s3_store(config: &ClientConfig) -> Result<Arc<dyn ObjectStoreBackend>> {
    let store = AmazonS3Builder::new()
        .with_endpoint(config.endpoint_url())
        .with_bucket_name(config.bucket().as_str())
        .with_region(config.region())
        .with_access_key_id(config.access_key())
        .with_secret_access_key(config.secret_key())
        .with_allow_http(!config.is_secure())
        .build()
        .with_context(|| format!("Failed to build S3 store for {}", config.endpoint_url()))?;

    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSource;

    #[test]
    fn test_create_s3_store_from_config() {
        let config = ConfigSource::builder()
            .access_key("Xabc123")
            .secret_key("secret")
            .endpoint("http://localhost:9000")
            .build()
            .resolve()
            .unwrap();

        // Building does not touch the network
        assert!(create_s3_store(&config).is_ok());
    }
}
