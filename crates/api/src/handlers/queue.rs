//! Handler for the admin review queue.

use axum::extract::State;
use axum::Json;
use promptdeck_core::status::{STATUS_APPROVED, STATUS_PENDING};
use promptdeck_db::models::prompt::QueuePrompt;
use promptdeck_db::repositories::PromptRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Snapshot of the review workload.
#[derive(Debug, Serialize)]
pub struct QueueResponse {
    /// Submissions awaiting review, oldest first.
    pub pending: Vec<QueuePrompt>,
    /// Published prompts, newest first.
    pub approved: Vec<QueuePrompt>,
    pub pending_count: i64,
    pub approved_count: i64,
    /// Distinct owners across all non-deleted prompts.
    pub contributor_count: i64,
}

/// GET /api/v1/admin/queue
pub async fn review_queue(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<QueueResponse>>> {
    let pending = PromptRepo::list_queue(&state.pool, STATUS_PENDING, true).await?;
    let approved = PromptRepo::list_queue(&state.pool, STATUS_APPROVED, false).await?;
    let pending_count = PromptRepo::count_by_status(&state.pool, STATUS_PENDING).await?;
    let approved_count = PromptRepo::count_by_status(&state.pool, STATUS_APPROVED).await?;
    let contributor_count = PromptRepo::count_contributors(&state.pool).await?;

    Ok(Json(DataResponse {
        data: QueueResponse {
            pending,
            approved,
            pending_count,
            approved_count,
            contributor_count,
        },
    }))
}
