//! Application state

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Cloned into every handler; the configuration is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
