//! Route definitions for bookmarks.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::bookmarks;
use crate::state::AppState;

/// Bookmark routes. All require authentication (handler extractors).
///
/// ```text
/// PUT    /prompts/{id}/bookmark   -> bookmarks::add
/// DELETE /prompts/{id}/bookmark   -> bookmarks::remove
/// GET    /bookmarks               -> bookmarks::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/prompts/{id}/bookmark",
            put(bookmarks::add).delete(bookmarks::remove),
        )
        .route("/bookmarks", get(bookmarks::list))
}
