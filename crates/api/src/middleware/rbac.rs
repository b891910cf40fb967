//! Role-based access control (RBAC) extractors.
//!
//! The role is never trusted from the token. [`RequireAdmin`] re-reads it
//! from the `profiles` table on every request, so a revoked admin loses
//! access on their next call, not at token expiry.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use promptdeck_core::error::CoreError;
use promptdeck_core::roles::ROLE_ADMIN;
use promptdeck_db::repositories::ProfileRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
///
/// A missing profile row is treated the same as a non-admin role.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let role = ProfileRepo::find_role(&state.pool, user.user_id).await?;
        if role.as_deref() != Some(ROLE_ADMIN) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }

        Ok(RequireAdmin(user))
    }
}
