use std::env;
use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use tracing::debug;

use crate::store::{DefaultKeyStrategy, ObjectKeyStrategy, PresignProvider};
use crate::types::SignedUploadTarget;
use crate::{BlobError, BlobResult};

/// S3-compatible configuration from environment variables
#[derive(Debug, Clone)]
pub struct S3Config {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub endpoint_url: Option<String>,
}

impl S3Config {
    pub fn from_env() -> BlobResult<Self> {
        fn get_env(key: &str) -> BlobResult<String> {
            env::var(key)
                .map_err(|_| BlobError::invalid(format!("{key} environment variable required")))
        }

        Ok(Self {
            region: get_env("SIGIL_S3_REGION")?,
            access_key_id: get_env("SIGIL_S3_ACCESS_KEY_ID")?,
            secret_access_key: get_env("SIGIL_S3_SECRET_ACCESS_KEY")?,
            bucket: get_env("SIGIL_S3_BUCKET")?,
            endpoint_url: env::var("SIGIL_S3_ENDPOINT_URL").ok(),
        })
    }
}

/// Presign provider backed by the AWS SDK, usable against S3 and
/// S3-compatible stores (MinIO, RustFS)
pub struct S3PresignProvider {
    client: Client,
    bucket: String,
    keys: Box<dyn ObjectKeyStrategy>,
    expires_in: Duration,
}

impl S3PresignProvider {
    pub async fn new(config: S3Config, expires_secs: u64) -> Self {
        let bucket = config.bucket.clone();
        let client = Self::create_client(config).await;
        Self {
            client,
            bucket,
            keys: Box::new(DefaultKeyStrategy),
            expires_in: Duration::from_secs(expires_secs),
        }
    }

    pub async fn from_env(expires_secs: u64) -> BlobResult<Self> {
        Ok(Self::new(S3Config::from_env()?, expires_secs).await)
    }

    /// Override the key strategy
    pub fn with_key_strategy<K: ObjectKeyStrategy + 'static>(mut self, keys: K) -> Self {
        self.keys = Box::new(keys);
        self
    }

    async fn create_client(config: S3Config) -> Client {
        let credentials = Credentials::new(
            config.access_key_id,
            config.secret_access_key,
            None,
            None,
            "sigil",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .credentials_provider(credentials);

        if let Some(endpoint) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let aws_config = loader.load().await;

        Client::from_conf(
            aws_sdk_s3::config::Builder::from(&aws_config)
                .force_path_style(true) // Required for S3-compatible stores
                .build(),
        )
    }

    fn presign_config(&self) -> BlobResult<PresigningConfig> {
        PresigningConfig::expires_in(self.expires_in)
            .map_err(|err| BlobError::presign(err.to_string()))
    }
}

#[async_trait]
impl PresignProvider for S3PresignProvider {
    async fn sign_put(&self, name: &str, _content_type: &str) -> BlobResult<SignedUploadTarget> {
        let key = self.keys.object_key(name);

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .presigned(self.presign_config()?)
            .await
            .map_err(|err| BlobError::presign(err.to_string()))?;

        debug!(bucket = %self.bucket, key = %key, "presigned upload target");

        Ok(SignedUploadTarget {
            url: presigned.uri().to_string(),
            key,
        })
    }

    async fn sign_get(&self, key: &str) -> BlobResult<String> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(self.presign_config()?)
            .await
            .map_err(|err| BlobError::presign(err.to_string()))?;

        Ok(presigned.uri().to_string())
    }

    async fn delete(&self, key: &str) -> BlobResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(BlobError::backend)?;

        Ok(())
    }
}
