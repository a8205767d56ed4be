//! The managed upload directory.

use crate::config::{DuplicatePolicy, StoreConfig};
use crate::digest::{digest_bytes, digest_file};
use crate::error::StoreError;
use crate::types::{IncomingFile, StoredFile};
use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// A single flat directory of uploaded files.
///
/// The directory listing is the catalog; no manifest or sidecar metadata is
/// kept. There is no locking around saves: concurrent uploads to the same
/// name race at the filesystem level and the last writer wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    upload_dir: PathBuf,
    max_file_size_mb: u64,
    on_duplicate: DuplicatePolicy,
}

impl FileStore {
    /// Create a store over `config.upload_dir`, creating the directory if it
    /// does not exist yet. Idempotent over an existing directory.
    pub async fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        fs::create_dir_all(&config.upload_dir).await?;
        Ok(Self {
            upload_dir: config.upload_dir,
            max_file_size_mb: config.max_file_size_mb,
            on_duplicate: config.on_duplicate,
        })
    }

    /// The directory this store manages.
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Save an upload batch, in input order. Returns the number of files
    /// written.
    ///
    /// The size ceiling is checked against every payload before any file is
    /// written, so an oversized member rejects the whole batch. A payload
    /// byte-identical to the stored file of the same name either aborts the
    /// batch or is skipped, per the configured [`DuplicatePolicy`]; any other
    /// name collision is an overwrite, not a rename.
    pub async fn save_files(&self, files: Vec<IncomingFile>) -> Result<usize, StoreError> {
        if let Some(oversized) = files.iter().find(|f| f.size_mb() > self.max_file_size_mb) {
            return Err(StoreError::SizeLimitExceeded {
                name: oversized.name.clone(),
                size_mb: oversized.size_mb(),
                limit_mb: self.max_file_size_mb,
            });
        }

        let mut written = 0;
        for file in files {
            let path = self.entry_path(&file.name)?;

            if fs::try_exists(&path).await? {
                let incoming = digest_bytes(&file.bytes);
                let existing = digest_file(&path).await?;
                if incoming == existing {
                    match self.on_duplicate {
                        DuplicatePolicy::AbortBatch => {
                            return Err(StoreError::DuplicateContent { name: file.name });
                        }
                        DuplicatePolicy::SkipFile => {
                            tracing::debug!(
                                file = %file.name,
                                digest = %incoming.to_hex(),
                                "skipping byte-identical upload"
                            );
                            continue;
                        }
                    }
                }
            }

            fs::write(&path, &file.bytes).await?;
            tracing::info!(file = %file.name, size_bytes = file.size_bytes(), "file saved");
            written += 1;
        }

        Ok(written)
    }

    /// List regular files in the upload directory, non-recursive.
    ///
    /// A non-empty `search` retains only names containing it,
    /// case-insensitive. Entries come back in filesystem enumeration order;
    /// an empty directory yields an empty vector.
    pub async fn list_files(&self, search: &str) -> Result<Vec<StoredFile>, StoreError> {
        let needle = search.to_lowercase();
        let mut entries = fs::read_dir(&self.upload_dir).await?;
        let mut listing = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !needle.is_empty() && !file_name.to_lowercase().contains(&needle) {
                continue;
            }
            listing.push(StoredFile {
                file_name,
                size: metadata.len(),
                date: DateTime::<Utc>::from(metadata.modified()?),
            });
        }

        Ok(listing)
    }

    /// Resolve a declared name inside the upload directory, rejecting
    /// anything that is not a single plain path component.
    fn entry_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let mut components = Path::new(name).components();
        let flat = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !flat {
            return Err(StoreError::InvalidFileName(name.to_string()));
        }
        Ok(self.upload_dir.join(name))
    }
}
