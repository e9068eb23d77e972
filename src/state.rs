//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{catalog::PoolProvider, config::Config, store::ContestStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Persistence backend
    pub store: Arc<dyn ContestStore>,

    /// Problem catalog provider
    pub provider: Arc<dyn PoolProvider>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        store: Arc<dyn ContestStore>,
        provider: Arc<dyn PoolProvider>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                provider,
                config,
            }),
        }
    }

    /// Get a reference to the contest store
    pub fn store(&self) -> &dyn ContestStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the catalog provider
    pub fn provider(&self) -> &dyn PoolProvider {
        self.inner.provider.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
