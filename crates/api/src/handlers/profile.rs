//! Handler for the caller's own profile.

use axum::extract::State;
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_db::models::profile::Profile;
use promptdeck_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me
///
/// The caller's profile row. 404 when the identity provider has issued a
/// token but no profile has been provisioned yet.
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse { data: profile }))
}
