pub mod admin;
pub mod bookmarks;
pub mod health;
pub mod profile;
pub mod prompts;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                 browse approved prompts (public)
/// /prompts/{id}            prompt detail (public)
/// /prompts/{id}/bookmark   add, remove bookmark (authenticated)
/// /bookmarks               caller's bookmarked prompts (authenticated)
/// /submissions             submit prompt, list own submissions (authenticated)
/// /me                      caller's profile (authenticated)
///
/// /admin/queue             review queue snapshot (admin only)
/// /admin/prompts/{id}      apply moderation action (admin only)
/// /admin/audit             recent moderation history (admin only)
/// ```
///
/// Authentication and authorization are enforced by handler extractors,
/// not route-level middleware; see `middleware::auth` and `middleware::rbac`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(prompts::router())
        .merge(submissions::router())
        .merge(bookmarks::router())
        .merge(profile::router())
        .nest("/admin", admin::router())
}
