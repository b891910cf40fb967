//! Handlers for the moderation audit trail (PRD-7).

use axum::extract::{Query, State};
use axum::Json;
use promptdeck_db::models::audit::AuditLogWithContext;
use promptdeck_db::repositories::AuditLogRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/audit`.
#[derive(Debug, Deserialize)]
pub struct RecentAuditParams {
    /// Maximum entries to return; clamped server-side.
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/audit
///
/// The most recent moderation history, newest first, enriched with prompt
/// titles and actor display names.
pub async fn list_recent(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<RecentAuditParams>,
) -> AppResult<Json<DataResponse<Vec<AuditLogWithContext>>>> {
    let entries = AuditLogRepo::list_recent(&state.pool, params.limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
