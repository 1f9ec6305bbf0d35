//! # sigil-blob: document blob storage for e-signing applications
//!
//! `sigil-blob` persists uploaded document files using one of two
//! interchangeable backends selected by configuration, and records the
//! chosen backend plus a locator through a metadata collaborator:
//!
//! - **Inline**: the file bytes are base64-encoded and stored directly in
//!   the document data record. The default, and the fallback for any
//!   unrecognized transport value.
//! - **S3**: the bytes are written straight to an S3-compatible object
//!   store through a presigned, time-limited upload target; only the
//!   object key is recorded.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sigil_blob::prelude::*;
//! use sigil_blob::{HttpUploadSink, MemoryDocumentDataStore, S3PresignProvider};
//!
//! # #[tokio::main]
//! # async fn main() -> BlobResult<()> {
//! // Transport comes from SIGIL_UPLOAD_TRANSPORT ("s3" or anything else)
//! let config = BlobConfig::from_env();
//!
//! let store = DocumentStore::new(
//!     config.clone(),
//!     S3PresignProvider::from_env(config.presign_expires_secs).await?,
//!     HttpUploadSink::new(),
//!     MemoryDocumentDataStore::new(),
//! );
//!
//! let request = UploadRequest::from_bytes("contract.pdf", "application/pdf", b"%PDF".to_vec());
//! let record = store.put_file(request).await?;
//!
//! let bytes = store.get_file(&record.reference()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Your Service    │  ← document CRUD, signing flow
//! ├──────────────────┤
//! │  DocumentStore   │  ← backend selection + metadata handoff
//! ├──────────────────┤
//! │  inline / remote │  ← base64 payload, or presign + direct write
//! └──────────────────┘
//! ```
//!
//! The collaborators at the edges - the presign provider, the HTTP sink,
//! and the document-data store - are traits, so services wire in their own
//! persistence layer and tests run against in-memory stubs.

pub mod config;
pub mod error;
pub mod facade;
pub mod inline;
pub mod memory;
mod remote;
pub mod s3;
pub mod sink;
pub mod store;
pub mod types;

// Re-export main types for clean API
pub use config::{BlobConfig, UploadTransport, TRANSPORT_ENV};
pub use error::{BlobError, BlobResult};
pub use facade::DocumentStore;
pub use memory::MemoryDocumentDataStore;
pub use s3::{S3Config, S3PresignProvider};
pub use sink::HttpUploadSink;
pub use store::{
    DefaultKeyStrategy, DocumentDataStore, ObjectKeyStrategy, PresignProvider, UploadSink,
};
pub use types::{
    BlobKind, ByteStream, DocumentDataId, DocumentDataRecord, SignedUploadTarget,
    StoredBlobReference, UploadRequest,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BlobConfig, BlobError, BlobKind, BlobResult, DocumentStore, StoredBlobReference,
        UploadRequest, UploadTransport,
    };
}
