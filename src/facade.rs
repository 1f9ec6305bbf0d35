use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::config::{BlobConfig, UploadTransport};
use crate::store::{DocumentDataStore, PresignProvider, UploadSink};
use crate::types::{BlobKind, DocumentDataRecord, StoredBlobReference, UploadRequest};
use crate::{inline, remote, BlobError, BlobResult};

/// The document blob store facade.
///
/// Selects a backend per call from the configured transport, persists the
/// blob, and hands the resulting `(kind, payload)` pair to the document-data
/// collaborator. Failures from either step propagate unchanged; the facade
/// performs no retries.
pub struct DocumentStore {
    config: BlobConfig,
    provider: Arc<dyn PresignProvider>,
    sink: Arc<dyn UploadSink>,
    documents: Arc<dyn DocumentDataStore>,
}

impl DocumentStore {
    pub fn new<P, U, D>(config: BlobConfig, provider: P, sink: U, documents: D) -> Self
    where
        P: PresignProvider + 'static,
        U: UploadSink + 'static,
        D: DocumentDataStore + 'static,
    {
        Self {
            config,
            provider: Arc::new(provider),
            sink: Arc::new(sink),
            documents: Arc::new(documents),
        }
    }

    /// Store an uploaded file and create its document data record.
    ///
    /// The upload's `name` must be non-empty; the MIME type is passed
    /// through unvalidated. Two calls with identical content produce two
    /// independent records.
    pub async fn put_file(&self, request: UploadRequest) -> BlobResult<DocumentDataRecord> {
        if request.name.is_empty() {
            return Err(BlobError::invalid("upload name must not be empty"));
        }

        let UploadRequest {
            name,
            content_type,
            body,
        } = request;

        let reference = match self.config.transport {
            UploadTransport::S3 => {
                remote::store(
                    self.provider.as_ref(),
                    self.sink.as_ref(),
                    &name,
                    &content_type,
                    body,
                )
                .await?
            }
            UploadTransport::Inline => inline::store(body).await?,
        };

        debug!(kind = %reference.kind, name = %name, "stored document blob");

        match self.documents.create(reference.kind, reference.payload.clone()).await {
            Ok(record) => {
                info!(id = %record.id, kind = %record.kind, "document data record created");
                Ok(record)
            }
            Err(err) => {
                if reference.kind == BlobKind::RemoteKey {
                    // The uploaded object is left in place for reconciliation.
                    warn!(
                        key = %reference.payload,
                        "document data creation failed after remote upload; object orphaned"
                    );
                }
                Err(err)
            }
        }
    }

    /// Reconstruct the file bytes behind a stored reference
    pub async fn get_file(&self, reference: &StoredBlobReference) -> BlobResult<Bytes> {
        match reference.kind {
            BlobKind::InlineBytes => Ok(Bytes::from(inline::decode(&reference.payload)?)),
            BlobKind::RemoteKey => {
                let url = self.provider.sign_get(&reference.payload).await?;
                self.sink.fetch(&url).await
            }
        }
    }

    /// Remove the blob content behind a stored reference.
    ///
    /// Inline payloads live inside the record itself, so only remote objects
    /// need a delete against the object store.
    pub async fn delete_file(&self, reference: &StoredBlobReference) -> BlobResult<()> {
        match reference.kind {
            BlobKind::InlineBytes => Ok(()),
            BlobKind::RemoteKey => self.provider.delete(&reference.payload).await,
        }
    }

    /// Get configuration
    pub fn config(&self) -> &BlobConfig {
        &self.config
    }
}
