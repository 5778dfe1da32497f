//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::authz::PolicyRegistry;
use crate::store::{MarketStore, MemoryStore};

/// Cloneable handle to everything a handler needs.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Storage backend.
    pub store: Arc<dyn MarketStore>,
    /// Role policy table.
    pub policy: Arc<PolicyRegistry>,
}

impl AppState {
    /// Build state over the in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Build state over an injected store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn MarketStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            policy: Arc::new(PolicyRegistry::new()),
        }
    }
}
