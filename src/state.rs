//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::AssignmentStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the configuration and the assignment store. Handlers only see the
/// store trait object, so tests swap in the in-memory fake without touching
/// the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn AssignmentStore>,
}

impl AppState {
    /// Creates a new application state from the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<dyn AssignmentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
