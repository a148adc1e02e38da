use std::sync::Arc;

use rwa_core::holders::HolderSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at start-up and cloned per request (inner data is behind `Arc`
/// or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; the asset store operates on it.
    pub pool: rwa_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of top-staker and holder-count data.
    pub holders: Arc<dyn HolderSource>,
}
