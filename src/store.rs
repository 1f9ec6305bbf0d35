use async_trait::async_trait;
use bytes::Bytes;
use chrono::Datelike;
use uuid::Uuid;

use crate::{BlobKind, BlobResult, DocumentDataRecord, SignedUploadTarget};

/// Issues signed targets for direct object-store access.
///
/// Implementations own key generation: `sign_put` must return a key that
/// cannot collide with existing objects, and a URL authorized for a single
/// write of bounded lifetime.
#[async_trait]
pub trait PresignProvider: Send + Sync {
    /// Generate a signed upload target for a new object
    async fn sign_put(&self, name: &str, content_type: &str) -> BlobResult<SignedUploadTarget>;

    /// Generate a signed URL for reading an existing object
    async fn sign_get(&self, key: &str) -> BlobResult<String>;

    /// Delete an object
    async fn delete(&self, key: &str) -> BlobResult<()>;
}

/// Creates the durable metadata record for a stored blob.
///
/// The facade treats this collaborator as opaque; its persistence guarantees
/// belong to the owning service.
#[async_trait]
pub trait DocumentDataStore: Send + Sync {
    async fn create(&self, kind: BlobKind, payload: String) -> BlobResult<DocumentDataRecord>;
}

/// Writes and reads full object bodies against signed URLs
#[async_trait]
pub trait UploadSink: Send + Sync {
    /// Single full-body write; fails on any non-success status
    async fn put(&self, url: &str, content_type: &str, body: Bytes) -> BlobResult<()>;

    /// Fetch a full object body
    async fn fetch(&self, url: &str) -> BlobResult<Bytes>;
}

/// Strategy for generating object-store keys
pub trait ObjectKeyStrategy: Send + Sync {
    /// Generate a unique key for an uploaded file
    fn object_key(&self, name: &str) -> String;
}

/// Default key strategy: year/month/random/filename
#[derive(Debug, Clone)]
pub struct DefaultKeyStrategy;

impl ObjectKeyStrategy for DefaultKeyStrategy {
    fn object_key(&self, name: &str) -> String {
        let now = chrono::Utc::now();
        format!(
            "{:04}/{:02}/{}/{}",
            now.year(),
            now.month(),
            Uuid::new_v4().simple(),
            sanitize_name(name)
        )
    }
}

/// Keep keys URL-safe: anything outside [A-Za-z0-9._-] becomes a dash
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_unique() {
        let keys = DefaultKeyStrategy;
        let a = keys.object_key("contract.pdf");
        let b = keys.object_key("contract.pdf");

        assert_ne!(a, b);
        assert!(a.ends_with("/contract.pdf"));
    }

    #[test]
    fn key_names_are_sanitized() {
        let keys = DefaultKeyStrategy;
        let key = keys.object_key("my contract (final).pdf");

        assert!(key.ends_with("/my-contract--final-.pdf"));
    }
}
