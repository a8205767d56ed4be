//! HTTP API for the mediastore managed upload directory.
//!
//! Two media operations — multipart upload and file listing — over a
//! [`mediastore::FileStore`], plus the usual service plumbing: liveness and
//! readiness probes, request-ID tracking, structured request logging, CORS,
//! request timeouts, and graceful shutdown that also tears down the
//! filesystem change monitor.
//!
//! # Endpoints
//!
//! - `GET /` - service information
//! - `GET /health` - liveness probe
//! - `GET /ready` - readiness probe
//! - `POST /api/media/upload` - multipart upload of one or more files
//! - `GET /api/media/filelist?search=` - list stored files, optional
//!   case-insensitive name filter
//!
//! # Error responses
//!
//! Failures carry a JSON envelope `{"error": {"code", "message"}}` with a
//! status per kind: empty uploads and bad names are 400, duplicate content
//! is 409, oversized files are 413, filesystem faults are 500.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
