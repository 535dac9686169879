use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;
use crate::views::{RouteTable, ViewLoader, ViewRegistry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The one résumé being edited. Clones share the same value.
    pub store: ResumeStore,
    pub routes: Arc<RouteTable>,
    /// Lazily-loaded view documents, keyed by view.
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    pub fn new(config: Config, store: ResumeStore, loader: Arc<dyn ViewLoader>) -> Self {
        let routes = Arc::new(RouteTable::new(&config.base_url));
        Self {
            config,
            store,
            routes,
            views: Arc::new(ViewRegistry::new(loader)),
        }
    }
}
