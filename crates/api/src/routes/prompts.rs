//! Route definitions for the public prompt catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Catalog routes. No authentication; these serve the public library.
///
/// ```text
/// GET /prompts        -> prompts::list
/// GET /prompts/{id}   -> prompts::get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(prompts::list))
        .route("/prompts/{id}", get(prompts::get_by_id))
}
