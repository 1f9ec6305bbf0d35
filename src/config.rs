use std::env;

/// Environment variable selecting the upload transport
pub const TRANSPORT_ENV: &str = "SIGIL_UPLOAD_TRANSPORT";

/// Which backend stores uploaded file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadTransport {
    /// Base64 payload stored inside the document data record
    #[default]
    Inline,
    /// Presigned upload to an S3-compatible object store
    S3,
}

impl UploadTransport {
    /// Resolve a transport from a raw configuration value.
    ///
    /// `"s3"` selects the object store; any other value, including absence,
    /// falls back to inline storage.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("s3") => UploadTransport::S3,
            _ => UploadTransport::Inline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadTransport::Inline => "inline",
            UploadTransport::S3 => "s3",
        }
    }
}

/// Configuration for the document blob store
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Backend selected for new uploads
    pub transport: UploadTransport,

    /// Lifetime of signed upload/download targets, in seconds
    pub presign_expires_secs: u64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            transport: UploadTransport::Inline,
            presign_expires_secs: 3600,
        }
    }
}

impl BlobConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the transport from the process environment
    pub fn from_env() -> Self {
        let transport = UploadTransport::parse(env::var(TRANSPORT_ENV).ok().as_deref());
        Self {
            transport,
            ..Self::default()
        }
    }

    /// Set the upload transport
    pub fn with_transport(mut self, transport: UploadTransport) -> Self {
        self.transport = transport;
        self
    }

    /// Set the signed-target lifetime
    pub fn with_presign_expiry(mut self, secs: u64) -> Self {
        self.presign_expires_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_value_selects_object_store() {
        assert_eq!(UploadTransport::parse(Some("s3")), UploadTransport::S3);
    }

    #[test]
    fn other_values_fall_back_to_inline() {
        assert_eq!(UploadTransport::parse(None), UploadTransport::Inline);
        assert_eq!(UploadTransport::parse(Some("")), UploadTransport::Inline);
        assert_eq!(UploadTransport::parse(Some("S3")), UploadTransport::Inline);
        assert_eq!(UploadTransport::parse(Some("gcs")), UploadTransport::Inline);
        assert_eq!(
            UploadTransport::parse(Some("database")),
            UploadTransport::Inline
        );
    }

    #[test]
    fn builders_override_defaults() {
        let config = BlobConfig::new()
            .with_transport(UploadTransport::S3)
            .with_presign_expiry(60);

        assert_eq!(config.transport, UploadTransport::S3);
        assert_eq!(config.presign_expires_secs, 60);
    }
}
