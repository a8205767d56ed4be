use crate::config::ServerConfig;
use crate::error::ServerResult;
use mediastore::FileStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Upload directory store (shared across requests)
    pub store: Arc<FileStore>,
}

impl ServerState {
    /// Create new server state, initializing the upload directory.
    pub async fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = Arc::new(FileStore::new(config.store.clone()).await?);

        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }
}
