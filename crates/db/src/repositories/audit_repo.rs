//! Repository for the append-only `audit_log` table (PRD-7).
//!
//! Only INSERT and SELECT are issued here. There is deliberately no update
//! or delete method: the audit trail is immutable history.

use promptdeck_core::audit::{DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT};
use promptdeck_core::types::EntityId;
use sqlx::PgPool;

use crate::models::audit::{AuditLog, AuditLogWithContext, CreateAuditLog};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for `audit_log` SELECT queries.
const COLUMNS: &str = "id, prompt_id, actor_id, action, note, metadata, created_at";

/// Column list for the enriched admin listing.
const CONTEXT_COLUMNS: &str = "a.id, a.prompt_id, a.actor_id, a.action, a.note, a.metadata, \
                               a.created_at, p.title AS prompt_title, \
                               pr.display_name AS actor_display_name";

// ---------------------------------------------------------------------------
// AuditLogRepo
// ---------------------------------------------------------------------------

/// Provides append and read operations for the audit trail.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append one entry, returning the stored row.
    pub async fn append(pool: &PgPool, entry: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_log (prompt_id, actor_id, action, note, metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entry.prompt_id)
            .bind(entry.actor_id)
            .bind(&entry.action)
            .bind(&entry.note)
            .bind(&entry.metadata)
            .fetch_one(pool)
            .await
    }

    /// Most recent entries, newest first, enriched with the prompt title and
    /// actor display name.
    ///
    /// `limit` defaults to 100 and is clamped to 1..=500. No cursor: the
    /// trail is an operator surface, not a feed.
    pub async fn list_recent(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<AuditLogWithContext>, sqlx::Error> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} FROM audit_log a \
             LEFT JOIN prompts p ON p.id = a.prompt_id \
             LEFT JOIN profiles pr ON pr.id = a.actor_id \
             ORDER BY a.created_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, AuditLogWithContext>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Full history for one prompt, oldest first.
    pub async fn list_for_prompt(
        pool: &PgPool,
        prompt_id: EntityId,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_log \
             WHERE prompt_id = $1 \
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(prompt_id)
            .fetch_all(pool)
            .await
    }
}
