//! Route definition for the caller's profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// ```text
/// GET /me   -> profile::me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(profile::me))
}
