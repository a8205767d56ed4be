use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// A single named payload within one upload batch.
///
/// Exists only for the duration of a [`FileStore::save_files`] call; the
/// declared length is the length of the payload itself.
///
/// [`FileStore::save_files`]: crate::FileStore::save_files
#[derive(Debug, Clone)]
pub struct IncomingFile {
    /// Declared file name. Must be a plain name; the store rejects anything
    /// carrying path components.
    pub name: String,
    /// Full payload content.
    pub bytes: Bytes,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Declared payload length in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Payload length in whole megabytes. Integer division truncates, so a
    /// payload under 1 MiB reports 0.
    pub fn size_mb(&self) -> u64 {
        self.size_bytes() / BYTES_PER_MB
    }
}

/// A file resident in the upload directory.
///
/// Built fresh from directory metadata on every listing; nothing is cached
/// between calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// File name, unique within the directory.
    pub file_name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mb_truncates_toward_zero() {
        let sub_mb = IncomingFile::new("a", vec![0u8; BYTES_PER_MB as usize - 1]);
        assert_eq!(sub_mb.size_mb(), 0);

        let just_over = IncomingFile::new("b", vec![0u8; BYTES_PER_MB as usize + 1]);
        assert_eq!(just_over.size_mb(), 1);
    }

    #[test]
    fn stored_file_serializes_camel_case() {
        let file = StoredFile {
            file_name: "clip.mp4".to_string(),
            size: 42,
            date: Utc::now(),
        };
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["fileName"], "clip.mp4");
        assert_eq!(value["size"], 42);
        assert!(value.get("date").is_some());
    }
}
