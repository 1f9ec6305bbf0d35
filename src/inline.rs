//! Inline backend: blob content encoded as base64 and stored inside the
//! document data record itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::{collect_stream, ByteStream, StoredBlobReference};
use crate::{BlobError, BlobResult};

/// Encode raw bytes into the inline payload encoding.
///
/// Total and reversible for all inputs; zero bytes encode to the empty
/// string.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode an inline payload back into the original bytes
pub fn decode(payload: &str) -> BlobResult<Vec<u8>> {
    STANDARD
        .decode(payload)
        .map_err(|err| BlobError::invalid(format!("inline payload is not valid base64: {err}")))
}

/// Read the whole upload body and encode it as an inline payload.
///
/// Only the read itself can fail; encoding is infallible.
pub(crate) async fn store(body: ByteStream) -> BlobResult<StoredBlobReference> {
    let data = collect_stream(body).await?;
    Ok(StoredBlobReference::inline(encode(&data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pdf_magic_bytes() {
        assert_eq!(encode(&[0x25, 0x50, 0x44, 0x46]), "JVBERg==");
    }

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn round_trips_arbitrary_bytes() {
        let samples: [&[u8]; 4] = [b"", b"\x00", b"hello world", &[0xff, 0x00, 0x7f, 0x80, 0x01]];

        for bytes in samples {
            assert_eq!(decode(&encode(bytes)).unwrap(), bytes);
        }
    }

    #[test]
    fn rejects_malformed_payloads() {
        let result = decode("not base64!!");

        assert!(matches!(result, Err(BlobError::Invalid { .. })));
    }
}
