//! Handlers for moderating submitted prompts (PRD-6).

use axum::extract::{Path, State};
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_core::moderation::target_status;
use promptdeck_core::types::EntityId;
use promptdeck_db::models::audit::CreateAuditLog;
use promptdeck_db::repositories::{AuditLogRepo, PromptRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /admin/prompts/{id}`.
#[derive(Debug, Deserialize)]
pub struct ModerationRequest {
    /// One of `approved`, `rejected`, `archived`.
    pub action: String,
}

/// Response body after a moderation action.
#[derive(Debug, Serialize)]
pub struct ModerationOutcome {
    /// The prompt's status after the action.
    pub status: String,
}

/// PATCH /api/v1/admin/prompts/{id}
///
/// Applies a moderation action to a prompt. The action value names its
/// target status; the current status is not checked, so re-applying a
/// state or moving an archived prompt back to approved both succeed.
/// Soft-deleted prompts are not moderatable (404).
pub async fn moderate(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<ModerationRequest>,
) -> AppResult<Json<DataResponse<ModerationOutcome>>> {
    let target = target_status(&input.action).map_err(CoreError::InvalidArgument)?;

    let prompt = PromptRepo::set_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    tracing::info!(
        prompt_id = %prompt.id,
        action = %input.action,
        actor_id = %admin.user_id,
        "Moderation action applied"
    );

    // The status write above is already durable; a failed audit insert is
    // logged but must not fail the request.
    let entry = CreateAuditLog {
        prompt_id: Some(prompt.id),
        actor_id: Some(admin.user_id),
        action: input.action,
        note: None,
        metadata: serde_json::json!({}),
    };
    if let Err(err) = AuditLogRepo::append(&state.pool, &entry).await {
        tracing::warn!(
            prompt_id = %prompt.id,
            error = %err,
            "Failed to record audit entry for moderation action"
        );
    }

    Ok(Json(DataResponse {
        data: ModerationOutcome {
            status: prompt.status,
        },
    }))
}
