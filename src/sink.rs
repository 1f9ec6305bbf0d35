use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::store::UploadSink;
use crate::{BlobError, BlobResult};

/// HTTP sink for presigned object-store endpoints
#[derive(Clone, Default)]
pub struct HttpUploadSink {
    client: reqwest::Client,
}

impl HttpUploadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pools, proxies)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UploadSink for HttpUploadSink {
    async fn put(&self, url: &str, content_type: &str, body: Bytes) -> BlobResult<()> {
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|err| BlobError::upload(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlobError::upload(format!(
                "signed target returned status {status}"
            )));
        }

        Ok(())
    }

    async fn fetch(&self, url: &str) -> BlobResult<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| BlobError::download(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlobError::download(format!(
                "object store returned status {status}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|err| BlobError::download(err.to_string()))
    }
}
