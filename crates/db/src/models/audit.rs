//! Audit log entity models (PRD-7).
//!
//! Models for the append-only audit trail. There is no update DTO because
//! the table is never updated: an entry is written once when a moderation
//! action is accepted and never touched again.

use promptdeck_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Audit log entity
// ---------------------------------------------------------------------------

/// A single audit log entry. Immutable once created (no updated_at).
///
/// `prompt_id` outlives hard deletion of the prompt as NULL; `actor_id` is
/// NULL for system-initiated actions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: EntityId,
    pub prompt_id: Option<EntityId>,
    pub actor_id: Option<EntityId>,
    pub action: String,
    pub note: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for appending an audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub prompt_id: Option<EntityId>,
    pub actor_id: Option<EntityId>,
    pub action: String,
    pub note: Option<String>,
    pub metadata: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Listing projection
// ---------------------------------------------------------------------------

/// An audit entry enriched for the admin listing with the prompt's current
/// title and the actor's display name. Both stay `None` when the referenced
/// row is gone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogWithContext {
    pub id: EntityId,
    pub prompt_id: Option<EntityId>,
    pub actor_id: Option<EntityId>,
    pub action: String,
    pub note: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
    pub prompt_title: Option<String>,
    pub actor_display_name: Option<String>,
}
