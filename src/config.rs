//! Runtime configuration for the file store.
//!
//! These types are cheap to clone and deserialize from external
//! configuration sources (files or environment variables); the server crate
//! nests [`StoreConfig`] inside its own configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// What [`FileStore::save_files`] does when an incoming payload is
/// byte-identical to the stored file of the same name.
///
/// [`FileStore::save_files`]: crate::FileStore::save_files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the whole batch with [`StoreError::DuplicateContent`], leaving
    /// later files in the batch unwritten.
    ///
    /// [`StoreError::DuplicateContent`]: crate::StoreError::DuplicateContent
    #[default]
    AbortBatch,
    /// Leave the stored file as-is and continue with the rest of the batch.
    SkipFile,
}

/// Configuration for a [`FileStore`](crate::FileStore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding every managed file. Created on store construction
    /// if absent.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Per-file size ceiling in whole megabytes, enforced against the whole
    /// batch before any write.
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// Duplicate-content handling for upload batches.
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_file_size_mb: default_max_file_size_mb(),
            on_duplicate: DuplicatePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Validate before constructing a store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyUploadDir);
        }
        if self.max_file_size_mb == 0 {
            return Err(ConfigError::ZeroSizeLimit);
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("upload_dir must not be empty")]
    EmptyUploadDir,

    #[error("max_file_size_mb must be greater than zero")]
    ZeroSizeLimit,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_max_file_size_mb() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(cfg.max_file_size_mb, 10);
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::AbortBatch);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_upload_dir_is_rejected() {
        let cfg = StoreConfig {
            upload_dir: PathBuf::new(),
            ..StoreConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyUploadDir));
    }

    #[test]
    fn zero_size_limit_is_rejected() {
        let cfg = StoreConfig {
            max_file_size_mb: 0,
            ..StoreConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSizeLimit));
    }

    #[test]
    fn duplicate_policy_deserializes_snake_case() {
        let cfg: StoreConfig =
            serde_json::from_str(r#"{"upload_dir": "/tmp/u", "on_duplicate": "skip_file"}"#)
                .unwrap();
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::SkipFile);
        assert_eq!(cfg.max_file_size_mb, 10);
    }
}
