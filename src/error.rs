//! Error surface of the file store.
//!
//! Store errors are typed rather than stringly so the HTTP layer can map
//! each kind to a distinct status code: size rejections and duplicates are
//! client faults, filesystem failures are system faults.

use thiserror::Error;

/// Errors surfaced by [`FileStore`](crate::FileStore) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Declared file name carries path separators or parent components and
    /// would escape the flat upload namespace.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    /// A payload in the batch exceeds the configured ceiling. The whole
    /// batch is rejected before any write.
    #[error("maximum file size exceeded: {name} is {size_mb} MB, limit is {limit_mb} MB")]
    SizeLimitExceeded {
        name: String,
        size_mb: u64,
        limit_mb: u64,
    },

    /// An existing file of the same name already holds identical content.
    #[error("file not updated, identical content already stored: {name}")]
    DuplicateContent { name: String },

    /// Configuration rejected at store construction.
    #[error("invalid store configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Underlying filesystem failure. Surfaced as-is, never retried.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the caller supplied bad input; false for system faults.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, StoreError::Io(_) | StoreError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_system_faults_are_distinguished() {
        assert!(StoreError::DuplicateContent {
            name: "a.txt".into()
        }
        .is_client_error());
        assert!(StoreError::SizeLimitExceeded {
            name: "a.txt".into(),
            size_mb: 3,
            limit_mb: 1
        }
        .is_client_error());
        assert!(StoreError::InvalidFileName("../a".into()).is_client_error());
        assert!(!StoreError::Io(std::io::Error::other("disk full")).is_client_error());
    }

    #[test]
    fn messages_identify_the_offending_file() {
        let err = StoreError::DuplicateContent {
            name: "clip.mp4".into(),
        };
        assert!(err.to_string().contains("clip.mp4"));

        let err = StoreError::SizeLimitExceeded {
            name: "big.bin".into(),
            size_mb: 12,
            limit_mb: 10,
        };
        assert!(err.to_string().contains("big.bin"));
        assert!(err.to_string().contains("12"));
    }
}
