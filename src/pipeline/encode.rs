//! PDF encoding: file bytes → standard base64 text.
//!
//! The endpoint receives the document inside a JSON string, so the bytes are
//! wrapped with the padded RFC 4648 alphabet (`STANDARD`), which every JSON
//! consumer and every base64 decoder accepts. The whole file is read in one
//! scoped call; the handle is closed before this function returns on every
//! path.

use crate::error::SummarizeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Read `path` and return its contents as base64.
///
/// Files that do not start with `%PDF` are still sent; the endpoint decides
/// whether it can use them.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<String, SummarizeError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SummarizeError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    if !bytes.starts_with(PDF_MAGIC) {
        warn!(
            "{} does not start with %PDF; sending it anyway",
            path.display()
        );
    }

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(encode_bytes(&bytes))
}

/// Encode raw bytes as base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let b64 = STANDARD.encode(bytes);
    debug!("Encoded PDF → {} bytes base64", b64.len());
    b64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn encode_file_round_trips() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(4099).collect();
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&bytes).unwrap();

        let b64 = encode_file(tmp.path()).await.expect("encode should succeed");
        let decoded = STANDARD.decode(&b64).expect("valid base64");
        assert_eq!(decoded, bytes);
    }

    #[tokio::test]
    async fn empty_file_encodes_to_empty_string() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(encode_file(tmp.path()).await.unwrap(), "");
    }

    #[tokio::test]
    async fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(dir.path()).await.unwrap_err();
        assert!(matches!(err, SummarizeError::ReadFailed { .. }));
        assert!(err.to_string().starts_with("Failed to read PDF: "), "got: {err}");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let err = encode_file("/definitely/not/a/real/file.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::ReadFailed { .. }));
    }

    #[test]
    fn encode_bytes_is_padded_standard() {
        assert_eq!(encode_bytes(b"%PDF-1"), "JVBERi0x");
        assert_eq!(encode_bytes(b"%PDF"), "JVBERg==");
    }
}
