use crate::domain::errors::ValidationError;
use crate::domain::value_objects::BucketName;

/// Errors crossing the bucket storage boundary
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The bucket listing call itself failed; nothing can be swept
    ListBuckets { message: String },

    /// A lifecycle update was rejected for one bucket
    PutLifecycle {
        bucket: BucketName,
        message: String,
    },

    /// The caller lacks permission to update the bucket
    AccessDenied { bucket: BucketName },

    /// The bucket disappeared between listing and update
    BucketNotFound { bucket: BucketName },

    /// The configuration could not be expressed as a valid request
    InvalidConfiguration { message: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ListBuckets { message } => {
                write!(f, "Failed to list buckets: {}", message)
            }
            StorageError::PutLifecycle { bucket, message } => {
                write!(
                    f,
                    "Failed to update lifecycle configuration for bucket '{}': {}",
                    bucket, message
                )
            }
            StorageError::AccessDenied { bucket } => {
                write!(f, "Access denied updating bucket '{}'", bucket)
            }
            StorageError::BucketNotFound { bucket } => {
                write!(f, "Bucket not found: {}", bucket)
            }
            StorageError::InvalidConfiguration { message } => {
                write!(f, "Invalid lifecycle configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
