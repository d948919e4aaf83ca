use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{errors::StorageResult, value_objects::ObjectKey};

/// Port for object storage operations within one bucket.
/// This abstracts the actual storage backend (S3, MinIO, in-memory).
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Store object data, returning the store's receipt
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<PutReceipt>;

    /// Retrieve object data; a missing key is `StorageError::ObjectNotFound`
    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Bytes>;

    /// Delete object data
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;

    /// List every object in the bucket
    async fn list_objects(&self) -> StorageResult<Vec<ObjectInfo>>;
}

/// What the store reports back after a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    pub etag: Option<String>,
}

/// Information about an object in storage
#[derive(Debug, Clone)]
pub struct ObjectInfo {
    pub key: ObjectKey,
    pub size: u64,
}
