//! Application state shared across handlers

use std::sync::Arc;

use crate::db::ItemStore;

/// Shared application state
///
/// Cloned per request; the store behind it is shared.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}
