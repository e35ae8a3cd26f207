use std::sync::Arc;

use crate::config::Config;
use crate::survey::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Insert-only result store. Default: SqliteResultStore over the request pool.
    pub store: Arc<dyn ResultStore>,
    pub config: Config,
}
