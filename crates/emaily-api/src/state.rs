use std::sync::Arc;

use emaily_storage::TemplateStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TemplateStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        Self { store }
    }
}
