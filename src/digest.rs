use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

const READ_CHUNK_BYTES: usize = 8 * 1024;

/// SHA-256 digest of a payload's full byte content.
///
/// Used only to compare two candidate contents for byte-for-byte equality.
/// This is a collision-acceptable checksum, not a security primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Hex rendering for log lines and diagnostics.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Digest an in-memory payload.
pub fn digest_bytes(bytes: &[u8]) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    ContentDigest(hasher.finalize().into())
}

/// Digest a file on disk, reading in fixed-size chunks.
///
/// The handle is scoped to this call and closed on every exit path. Read
/// failures propagate to the caller.
pub async fn digest_file(path: &Path) -> std::io::Result<ContentDigest> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; READ_CHUNK_BYTES];
    loop {
        let read = file.read(&mut buf).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(ContentDigest(hasher.finalize().into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_and_order_sensitive() {
        assert_eq!(digest_bytes(b"hello world"), digest_bytes(b"hello world"));
        assert_ne!(digest_bytes(b"hello world"), digest_bytes(b"world hello"));
        assert_ne!(digest_bytes(b""), digest_bytes(b"\0"));
    }

    #[test]
    fn hex_rendering_is_64_chars() {
        assert_eq!(digest_bytes(b"abc").to_hex().len(), 64);
    }

    #[tokio::test]
    async fn file_digest_matches_in_memory_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin");
        // Larger than one read chunk so the loop runs more than once.
        let payload: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
        tokio::fs::write(&path, &payload).await.unwrap();

        assert_eq!(digest_file(&path).await.unwrap(), digest_bytes(&payload));
    }

    #[tokio::test]
    async fn missing_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = digest_file(&dir.path().join("absent")).await;
        assert!(result.is_err());
    }
}
