//! Prompt entity models and DTOs (PRD-2).

use promptdeck_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Prompt entity
// ---------------------------------------------------------------------------

/// A prompt row as stored, including moderation state and ownership.
///
/// Returned to the owner (own-submission listing) and to admin surfaces;
/// public reads use [`PublicPrompt`] instead.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: EntityId,
    pub owner_id: EntityId,
    pub title: String,
    pub category: Vec<String>,
    pub role: Option<String>,
    pub use_case: Option<String>,
    pub prompt_text: String,
    pub model_compatibility: Vec<String>,
    pub difficulty: String,
    pub status: String,
    pub version: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Public projection
// ---------------------------------------------------------------------------

/// A prompt as shown on public browse surfaces.
///
/// Never exposes `owner_id` or the soft-delete marker; carries the owner's
/// display name for attribution instead (`"Unknown"` when the profile is
/// gone).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicPrompt {
    pub id: EntityId,
    pub title: String,
    pub category: Vec<String>,
    pub role: Option<String>,
    pub use_case: Option<String>,
    pub prompt_text: String,
    pub model_compatibility: Vec<String>,
    pub difficulty: String,
    pub status: String,
    pub version: String,
    pub owner_display_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Queue projection
// ---------------------------------------------------------------------------

/// A row on the admin review queue: enough to judge a submission without
/// loading the full prompt.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueuePrompt {
    pub id: EntityId,
    pub title: String,
    pub use_case: Option<String>,
    pub category: Vec<String>,
    pub owner_id: EntityId,
    pub owner_display_name: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for inserting a new prompt.
///
/// Deliberately has no owner, status, or version fields: the repository
/// binds the owner from the authenticated caller, forces the status to
/// `pending`, and lets the schema default the version.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub title: String,
    pub category: Vec<String>,
    pub role: Option<String>,
    pub use_case: Option<String>,
    pub prompt_text: String,
    pub model_compatibility: Vec<String>,
    pub difficulty: String,
}

// ---------------------------------------------------------------------------
// Browse filter
// ---------------------------------------------------------------------------

/// Filter parameters for the public browse listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptFilter {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
