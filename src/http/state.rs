//! Application state for the HTTP server.

use std::sync::Arc;

use crate::callbacks::{default_registry, CallbackRegistry};
use crate::data::LaunchDataset;
use crate::layout::{build_layout, DashboardLayout};

/// Shared application state passed to all handlers.
///
/// Everything here is read-only after startup: the dataset is loaded
/// once, the registry and layout are built from it, and handlers only
/// ever borrow them.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<LaunchDataset>,
    pub registry: Arc<CallbackRegistry>,
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    /// Build the state for a loaded dataset, wiring the default callback
    /// registry and the page layout.
    pub fn new(dataset: LaunchDataset) -> Self {
        let layout = build_layout(&dataset);
        AppState {
            dataset: Arc::new(dataset),
            registry: Arc::new(default_registry()),
            layout: Arc::new(layout),
        }
    }
}
