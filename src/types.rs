use bytes::Bytes;
use futures_core::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use uuid::Uuid;

use crate::BlobResult;

/// Stream of bytes for an upload body
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// A file handed to the blob store for persistence.
///
/// The body can be consumed exactly once; the request only lives for the
/// duration of a single store operation.
pub struct UploadRequest {
    pub name: String,
    pub content_type: String,
    pub body: ByteStream,
}

impl UploadRequest {
    pub fn new<S: Into<String>, T: Into<String>>(name: S, content_type: T, body: ByteStream) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            body,
        }
    }

    /// Build a request from bytes already held in memory
    pub fn from_bytes<S: Into<String>, T: Into<String>, B: Into<Bytes>>(
        name: S,
        content_type: T,
        bytes: B,
    ) -> Self {
        let bytes = bytes.into();
        let stream = futures_util::stream::once(async move { Ok::<Bytes, std::io::Error>(bytes) });
        Self::new(name, content_type, Box::pin(stream))
    }
}

/// Which backend holds the blob content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlobKind {
    /// The payload is the base64-encoded content itself
    InlineBytes,
    /// The payload is an opaque object-store locator
    RemoteKey,
}

impl BlobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlobKind::InlineBytes => "inline-bytes",
            BlobKind::RemoteKey => "remote-key",
        }
    }
}

impl std::fmt::Display for BlobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The persisted result of storing a blob.
///
/// For `InlineBytes` the payload is sufficient to reconstruct the content;
/// for `RemoteKey` it must be resolved through the object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlobReference {
    pub kind: BlobKind,
    pub payload: String,
}

impl StoredBlobReference {
    pub fn inline<S: Into<String>>(payload: S) -> Self {
        Self {
            kind: BlobKind::InlineBytes,
            payload: payload.into(),
        }
    }

    pub fn remote<S: Into<String>>(key: S) -> Self {
        Self {
            kind: BlobKind::RemoteKey,
            payload: key.into(),
        }
    }
}

/// A time-limited write endpoint issued by the object-store provider.
///
/// `key` is the locator that becomes the stored payload once the write
/// succeeds. Never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUploadTarget {
    pub url: String,
    pub key: String,
}

/// Unique identifier for a document data record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentDataId(pub String);

impl DocumentDataId {
    /// Generate a new random record ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from existing string
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentDataId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentDataId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata record created by the document-data collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDataRecord {
    pub id: DocumentDataId,
    pub kind: BlobKind,
    pub payload: String,
    pub created_at: i64,
}

impl DocumentDataRecord {
    /// The blob reference this record persists
    pub fn reference(&self) -> StoredBlobReference {
        StoredBlobReference {
            kind: self.kind,
            payload: self.payload.clone(),
        }
    }
}

/// Drain an upload body into memory
pub(crate) async fn collect_stream(mut stream: ByteStream) -> BlobResult<Bytes> {
    use futures_util::StreamExt;

    let mut data = Vec::new();
    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(&chunk?);
    }
    Ok(Bytes::from(data))
}
