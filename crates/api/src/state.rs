use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the config sits
/// behind one. Holds no domain state; every request reads and writes
/// through the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptdeck_db::DbPool,
    /// Server configuration (JWT secret, domain gate, timeouts).
    pub config: Arc<ServerConfig>,
}
