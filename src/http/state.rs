//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::ArtifactStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Artifact store for per-request reads
    pub store: Arc<ArtifactStore>,
}

impl AppState {
    /// Create a new application state over the given store.
    pub fn new(store: ArtifactStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
