use std::sync::Arc;

use reel_catalog::VideoCatalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn VideoCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn VideoCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn VideoCatalog {
        self.catalog.as_ref()
    }
}
