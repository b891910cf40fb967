//! Handlers for the public prompt catalog (PRD-2).

use axum::extract::{Path, Query, State};
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_core::types::EntityId;
use promptdeck_db::models::prompt::{PromptFilter, PublicPrompt};
use promptdeck_db::repositories::PromptRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/prompts
///
/// Browse approved prompts. Supports `category`, `difficulty`, and `search`
/// filters plus `limit`/`offset` pagination; see [`PromptFilter`].
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PromptFilter>,
) -> AppResult<Json<DataResponse<Vec<PublicPrompt>>>> {
    let prompts = PromptRepo::list_public(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: prompts }))
}

/// GET /api/v1/prompts/{id}
///
/// Prompt detail. Only approved, non-deleted prompts resolve; anything
/// else is a 404, indistinguishable from an id that never existed.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<PublicPrompt>>> {
    let prompt = PromptRepo::find_public(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(DataResponse { data: prompt }))
}
