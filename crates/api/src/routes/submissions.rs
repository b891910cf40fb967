//! Route definitions for prompt submissions.

use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Submission routes. Both require authentication (handler extractors).
///
/// ```text
/// POST /submissions   -> submissions::submit
/// GET  /submissions   -> submissions::list_own
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/submissions",
        post(submissions::submit).get(submissions::list_own),
    )
}
