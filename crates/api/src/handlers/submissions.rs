//! Handlers for the `/submissions` resource (PRD-3).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promptdeck_core::error::CoreError;
use promptdeck_core::submission::{validate_submission, NewSubmission};
use promptdeck_core::types::EntityId;
use promptdeck_db::models::prompt::{CreatePrompt, Prompt};
use promptdeck_db::repositories::PromptRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /submissions`.
///
/// Deliberately has no owner or status field, and serde drops unknown
/// fields, so neither value can be smuggled in through the body.
#[derive(Debug, Deserialize)]
pub struct SubmitPromptRequest {
    pub title: String,
    #[serde(default)]
    pub category: Vec<String>,
    pub role: Option<String>,
    pub use_case: Option<String>,
    pub prompt_text: String,
    #[serde(default)]
    pub model_compatibility: Vec<String>,
    pub difficulty: String,
}

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    pub id: EntityId,
}

/// POST /api/v1/submissions
///
/// Validates every field (collecting all failures), checks the email
/// domain gate, then inserts the prompt as `pending` owned by the caller.
/// Owner and status always come from the server side.
pub async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SubmitPromptRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionAccepted>>)> {
    if !state.config.allows_email(&user.email) {
        let domains: Vec<String> = state
            .config
            .allowed_email_domains
            .iter()
            .map(|d| format!("@{d}"))
            .collect();
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Only {} accounts can submit prompts",
            domains.join(", ")
        ))));
    }

    let candidate = NewSubmission {
        title: &input.title,
        category: &input.category,
        role: input.role.as_deref(),
        use_case: input.use_case.as_deref(),
        prompt_text: &input.prompt_text,
        model_compatibility: &input.model_compatibility,
        difficulty: &input.difficulty,
    };
    validate_submission(&candidate).map_err(AppError::Validation)?;

    let create_dto = CreatePrompt {
        title: input.title,
        category: input.category,
        role: input.role,
        use_case: input.use_case,
        prompt_text: input.prompt_text,
        model_compatibility: input.model_compatibility,
        difficulty: input.difficulty,
    };

    let prompt = PromptRepo::create_pending(&state.pool, user.user_id, &create_dto).await?;
    tracing::info!(prompt_id = %prompt.id, owner_id = %user.user_id, "Prompt submitted for review");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionAccepted { id: prompt.id },
        }),
    ))
}

/// GET /api/v1/submissions
///
/// The caller's own prompts in every status, newest first. Soft-deleted
/// rows are hidden here too.
pub async fn list_own(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Prompt>>>> {
    let prompts = PromptRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: prompts }))
}
