use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{
    Attribute, Attributes, ObjectStore as ApacheObjectStore, PutOptions, PutPayload,
    path::Path as ObjectPath,
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::for_key;
use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::ObjectKey,
    },
    ports::storage::{ObjectInfo, ObjectStore, PutReceipt},
};

/// Adapter that implements our ObjectStore trait using Apache object_store.
/// The wrapped store is already bound to a single bucket.
#[derive(Clone)]
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }

    /// Store path for a key, taken verbatim (never percent-encoded)
    fn path(key: &ObjectKey) -> StorageResult<ObjectPath> {
        ObjectPath::parse(key.as_str()).map_err(|e| StorageError::ValidationError {
            message: format!("Object key '{}' is not a valid store path: {}", key, e),
        })
    }
}

#[async_trait]
impl ObjectStore for ApacheObjectStoreAdapter {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<PutReceipt> {
        let path = Self::path(key)?;
        let size = data.len();
        let payload = PutPayload::from(data);

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = self
            .inner
            .put_opts(&path, payload, options)
            .await
            .map_err(for_key(key))?;

        debug!(key = %key, size, etag = ?result.e_tag, "Stored object");

        Ok(PutReceipt {
            etag: result.e_tag,
        })
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Bytes> {
        let path = Self::path(key)?;

        let result = self.inner.get(&path).await.map_err(for_key(key))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::InfrastructureError {
                message: format!("Failed to read object bytes: {}", e),
                source: Some(e.to_string()),
            })?;

        Ok(bytes)
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        let path = Self::path(key)?;

        self.inner.delete(&path).await.map_err(for_key(key))?;

        Ok(())
    }

    async fn list_objects(&self) -> StorageResult<Vec<ObjectInfo>> {
        let mut stream = self.inner.list(None);
        let mut objects = Vec::new();

        while let Some(meta) = stream.try_next().await.map_err(StorageError::from)? {
            // Objects written by other tools may use keys this client never produces
            let key = match ObjectKey::new(meta.location.to_string()) {
                Ok(key) => key,
                Err(e) => {
                    warn!(
                        location = %meta.location,
                        error = %e,
                        "Skipping object with unsupported key"
                    );
                    continue;
                }
            };

            objects.push(ObjectInfo { key, size: meta.size });
        }

        Ok(objects)
    }
}
