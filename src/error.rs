use thiserror::Error;

/// Result type for blob operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Errors that can occur while storing or retrieving document blobs
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    #[error("Failed to read upload body: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to obtain signed upload target: {reason}")]
    Presign { reason: String },

    #[error("Upload to signed target failed: {reason}")]
    Upload { reason: String },

    #[error("Download from object store failed: {reason}")]
    Download { reason: String },

    #[error("Document data record creation failed: {reason}")]
    Metadata { reason: String },

    #[error("Storage backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BlobError {
    /// Create an invalid request error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a presign error
    pub fn presign<S: Into<String>>(reason: S) -> Self {
        Self::Presign {
            reason: reason.into(),
        }
    }

    /// Create an upload error
    pub fn upload<S: Into<String>>(reason: S) -> Self {
        Self::Upload {
            reason: reason.into(),
        }
    }

    /// Create a download error
    pub fn download<S: Into<String>>(reason: S) -> Self {
        Self::Download {
            reason: reason.into(),
        }
    }

    /// Create a metadata error
    pub fn metadata<S: Into<String>>(reason: S) -> Self {
        Self::Metadata {
            reason: reason.into(),
        }
    }

    /// Create a backend error from any error type
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }
}
