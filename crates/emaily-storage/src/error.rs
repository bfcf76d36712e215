use thiserror::Error;
use uuid::Uuid;

use emaily_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("template not found: {id}")]
    NotFound { id: Uuid },

    #[error("validation failed: {0}")]
    Validation(#[from] CoreError),

    #[error("object not found: {key}")]
    ObjectNotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 HeadObject error: {0}")]
    HeadObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}
