//! Managed upload directory with digest-based duplicate detection.
//!
//! `mediastore` is the core library behind the mediastore server. It owns a
//! single flat upload directory and exposes three pieces:
//!
//! - [`FileStore`]: saves incoming upload batches (whole-batch size guard,
//!   duplicate detection by SHA-256 content digest, overwrite semantics) and
//!   lists stored files with optional case-insensitive name filtering.
//! - [`ChangeMonitor`]: a long-lived background task that subscribes to
//!   filesystem notifications for the upload directory and logs create,
//!   modify, and rename events. Observability only; nothing reads its output.
//! - [`digest`]: SHA-256 content digests used for byte-equality comparison.
//!
//! The directory listing is the catalog: no manifest, index, or sidecar
//! metadata is maintained.

pub mod config;
pub mod digest;
pub mod error;
pub mod monitor;
pub mod store;
pub mod types;

pub use config::{ConfigError, DuplicatePolicy, StoreConfig};
pub use digest::{digest_bytes, digest_file, ContentDigest};
pub use error::StoreError;
pub use monitor::ChangeMonitor;
pub use store::FileStore;
pub use types::{IncomingFile, StoredFile};
