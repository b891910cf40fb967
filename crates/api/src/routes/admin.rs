//! Route definitions for the admin review surface (PRD-6, PRD-7).

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{audit, moderation, queue};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors,
/// with a fresh role lookup per request).
///
/// ```text
/// GET   /queue          -> queue::review_queue
/// PATCH /prompts/{id}   -> moderation::moderate
/// GET   /audit          -> audit::list_recent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/queue", get(queue::review_queue))
        .route("/prompts/{id}", patch(moderation::moderate))
        .route("/audit", get(audit::list_recent))
}
