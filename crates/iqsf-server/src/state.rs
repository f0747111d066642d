//! State shared by all request handlers.

use std::sync::Arc;

use iqsf_store::Storage;

/// Handler state. Cloned per request; the store itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
