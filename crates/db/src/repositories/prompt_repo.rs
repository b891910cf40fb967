//! Repository for the `prompts` table (PRD-2, PRD-6).

use promptdeck_core::status::{STATUS_APPROVED, STATUS_PENDING};
use promptdeck_core::types::EntityId;
use sqlx::PgPool;

use crate::models::prompt::{CreatePrompt, Prompt, PromptFilter, PublicPrompt, QueuePrompt};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list shared across full-row queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, category, role, use_case, prompt_text, \
                       model_compatibility, difficulty, status, version, deleted_at, \
                       created_at, updated_at";

/// Column list for public reads: no owner id, no soft-delete marker, and the
/// owner's display name resolved for attribution.
const PUBLIC_COLUMNS: &str = "p.id, p.title, p.category, p.role, p.use_case, p.prompt_text, \
                              p.model_compatibility, p.difficulty, p.status, p.version, \
                              COALESCE(pr.display_name, 'Unknown') AS owner_display_name, \
                              p.created_at, p.updated_at";

/// Column list for the admin review queue.
const QUEUE_COLUMNS: &str = "p.id, p.title, p.use_case, p.category, p.owner_id, \
                             COALESCE(pr.display_name, 'Unknown') AS owner_display_name, \
                             p.created_at";

/// Default and maximum page size for the public browse listing.
const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// PromptRepo
// ---------------------------------------------------------------------------

/// Provides insert, read, and moderation operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt owned by `owner_id`.
    ///
    /// The status is always bound to `pending` here and the owner comes from
    /// the authenticated caller: neither is ever taken from client input.
    pub async fn create_pending(
        pool: &PgPool,
        owner_id: EntityId,
        input: &CreatePrompt,
    ) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (owner_id, title, category, role, use_case, prompt_text, \
                                  model_compatibility, difficulty, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.role)
            .bind(&input.use_case)
            .bind(&input.prompt_text)
            .bind(&input.model_compatibility)
            .bind(&input.difficulty)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a prompt by id, regardless of status or soft-delete state.
    ///
    /// Admin-facing: public reads go through [`Self::find_public`].
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public browse listing: approved, non-deleted prompts with optional
    /// category / difficulty / search filters, newest first.
    pub async fn list_public(
        pool: &PgPool,
        filter: &PromptFilter,
    ) -> Result<Vec<PublicPrompt>, sqlx::Error> {
        let limit = filter
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = filter.offset.unwrap_or(0).max(0);

        let (filter_clause, bind_values, bind_idx) = build_browse_filter(filter);

        let query = format!(
            "SELECT {PUBLIC_COLUMNS} FROM prompts p \
             LEFT JOIN profiles pr ON pr.id = p.owner_id \
             WHERE p.status = $1 AND p.deleted_at IS NULL{filter_clause} \
             ORDER BY p.created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, PublicPrompt>(&query).bind(STATUS_APPROVED);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Public detail read: approved and non-deleted only.
    pub async fn find_public(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<PublicPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {PUBLIC_COLUMNS} FROM prompts p \
             LEFT JOIN profiles pr ON pr.id = p.owner_id \
             WHERE p.id = $1 AND p.status = $2 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, PublicPrompt>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .fetch_optional(pool)
            .await
    }

    /// A user's own prompts, any status, newest first.
    ///
    /// Soft-deleted rows are hidden here too: deletion removes a prompt from
    /// every non-admin surface, including its owner's.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: EntityId,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts \
             WHERE owner_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// The user's bookmarked prompts that are still publicly visible,
    /// newest bookmark first.
    pub async fn list_bookmarked(
        pool: &PgPool,
        user_id: EntityId,
    ) -> Result<Vec<PublicPrompt>, sqlx::Error> {
        let query = format!(
            "SELECT {PUBLIC_COLUMNS} FROM bookmarks b \
             JOIN prompts p ON p.id = b.prompt_id \
             LEFT JOIN profiles pr ON pr.id = p.owner_id \
             WHERE b.user_id = $1 AND p.status = $2 AND p.deleted_at IS NULL \
             ORDER BY b.created_at DESC"
        );
        sqlx::query_as::<_, PublicPrompt>(&query)
            .bind(user_id)
            .bind(STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// Set the moderation status, returning the updated row.
    ///
    /// Returns `None` when the id does not exist or the prompt is
    /// soft-deleted. No source-state check: re-applying the current status
    /// succeeds, and concurrent writers resolve last-write-wins.
    pub async fn set_status(
        pool: &PgPool,
        id: EntityId,
        status: &str,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET status = $2 \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a prompt. Returns `true` if the row was marked.
    ///
    /// Idempotent in effect: a second call finds no undeleted row and
    /// returns `false`.
    pub async fn soft_delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE prompts SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Queue rows for one status group on the admin review screen.
    ///
    /// `oldest_first` is used for the pending group so the longest-waiting
    /// submissions surface on top.
    pub async fn list_queue(
        pool: &PgPool,
        status: &str,
        oldest_first: bool,
    ) -> Result<Vec<QueuePrompt>, sqlx::Error> {
        let order = if oldest_first { "ASC" } else { "DESC" };
        let query = format!(
            "SELECT {QUEUE_COLUMNS} FROM prompts p \
             LEFT JOIN profiles pr ON pr.id = p.owner_id \
             WHERE p.status = $1 AND p.deleted_at IS NULL \
             ORDER BY p.created_at {order}"
        );
        sqlx::query_as::<_, QueuePrompt>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Number of non-deleted prompts in a status.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM prompts WHERE status = $1 AND deleted_at IS NULL",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Number of distinct users with at least one non-deleted prompt.
    pub async fn count_contributors(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT owner_id)::BIGINT FROM prompts WHERE deleted_at IS NULL",
        )
        .fetch_one(pool)
        .await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build extra WHERE conditions and bind values from browse filters.
///
/// Returns `(filter_clause, bind_values, next_bind_index)`. The clause is
/// empty or starts with ` AND `; `$1` is reserved for the status bind. All
/// browse filters bind as text, so no typed bind enum is needed here.
fn build_browse_filter(filter: &PromptFilter) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 2u32;
    let mut bind_values: Vec<String> = Vec::new();

    if let Some(ref category) = filter.category {
        conditions.push(format!("${bind_idx} = ANY(p.category)"));
        bind_idx += 1;
        bind_values.push(category.clone());
    }

    if let Some(ref difficulty) = filter.difficulty {
        conditions.push(format!("p.difficulty = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(difficulty.clone());
    }

    if let Some(ref search) = filter.search {
        conditions.push(format!(
            "(p.title ILIKE ${bind_idx} OR p.use_case ILIKE ${bind_idx} \
             OR p.prompt_text ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(format!("%{search}%"));
    }

    let filter_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" AND {}", conditions.join(" AND "))
    };

    (filter_clause, bind_values, bind_idx)
}
