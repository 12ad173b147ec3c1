use std::sync::Arc;

use offload_extractor::BrainDumpExtractor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: offload_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Brain-dump extraction client; tests substitute a stub.
    pub extractor: Arc<dyn BrainDumpExtractor>,
}
