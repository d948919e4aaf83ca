use crate::domain::{errors::StorageError, value_objects::ObjectKey};

/// Convert object_store errors to domain storage errors
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => {
                // Try to create ObjectKey, fallback to validation error if invalid
                match ObjectKey::new(path) {
                    Ok(key) => StorageError::ObjectNotFound { key },
                    Err(e) => StorageError::ValidationError {
                        message: format!("Invalid object path from store: {}", e),
                    },
                }
            }
            object_store::Error::PermissionDenied { ref path, .. }
            | object_store::Error::Unauthenticated { ref path, .. } => {
                StorageError::AccessDenied {
                    key: ObjectKey::new(path.clone()).ok(),
                    operation: err.to_string(),
                }
            }
            object_store::Error::NotSupported { .. }
            | object_store::Error::NotImplemented => StorageError::UnsupportedOperation {
                operation: "unknown".to_string(),
                reason: err.to_string(),
            },
            _ => StorageError::InfrastructureError {
                message: format!("Object store operation failed: {}", err),
                source: Some(err.to_string()),
            },
        }
    }
}

/// Map a store error, pinning not-found errors to the key that was requested
pub(crate) fn for_key(key: &ObjectKey) -> impl Fn(object_store::Error) -> StorageError + '_ {
    move |err| match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        other => other.into(),
    }
}
