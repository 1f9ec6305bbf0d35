//! Remote backend: blob content uploaded to an object store through a
//! presigned target, with only the key recorded as the payload.

use tracing::debug;

use crate::store::{PresignProvider, UploadSink};
use crate::types::{collect_stream, ByteStream, StoredBlobReference};
use crate::BlobResult;

/// Content type sent with the presigned write, regardless of the upload's
/// own MIME type
pub(crate) const UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Store an upload in the object store.
///
/// Steps are strictly sequential: obtain a signed target, read the body,
/// issue one full-body write. A presign failure aborts before any bytes are
/// read; there is no fallback to inline storage and no retry. The write's
/// response body is never inspected.
pub(crate) async fn store(
    provider: &dyn PresignProvider,
    sink: &dyn UploadSink,
    name: &str,
    content_type: &str,
    body: ByteStream,
) -> BlobResult<StoredBlobReference> {
    let target = provider.sign_put(name, content_type).await?;
    debug!(key = %target.key, "signed upload target issued");

    let data = collect_stream(body).await?;
    sink.put(&target.url, UPLOAD_CONTENT_TYPE, data).await?;

    Ok(StoredBlobReference::remote(target.key))
}
