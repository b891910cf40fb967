//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version baked in at compile time.
    pub version: &'static str,
    /// Result of a `SELECT 1` against the pool.
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; a failing database ping shows up as `"degraded"`
/// in the body rather than as an error status.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = promptdeck_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
