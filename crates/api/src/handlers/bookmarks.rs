//! Handlers for bookmarking prompts from the public catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_core::types::EntityId;
use promptdeck_db::models::prompt::PublicPrompt;
use promptdeck_db::repositories::{BookmarkRepo, PromptRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/prompts/{id}/bookmark
///
/// Bookmarks a prompt for the caller. Only prompts visible in the public
/// catalog can be bookmarked; re-bookmarking is a no-op. 204 either way.
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    PromptRepo::find_public(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    BookmarkRepo::put(&state.pool, user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/prompts/{id}/bookmark
///
/// Removes the caller's bookmark. 204 whether or not one existed.
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    BookmarkRepo::delete(&state.pool, user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/bookmarks
///
/// The caller's bookmarked prompts that are still publicly visible,
/// newest bookmark first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<PublicPrompt>>>> {
    let prompts = PromptRepo::list_bookmarked(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: prompts }))
}
