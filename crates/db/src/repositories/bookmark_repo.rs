//! Repository for the `bookmarks` table.
//!
//! Bookmarked prompts are read back through
//! [`crate::repositories::PromptRepo::list_bookmarked`], which owns the
//! prompt projection; this repo only writes the existence rows.

use promptdeck_core::types::EntityId;
use sqlx::PgPool;

use crate::models::bookmark::Bookmark;

/// Provides existence operations for bookmarks.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Record a bookmark. Idempotent: bookmarking twice is a no-op.
    pub async fn put(
        pool: &PgPool,
        user_id: EntityId,
        prompt_id: EntityId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO bookmarks (user_id, prompt_id) VALUES ($1, $2)
             ON CONFLICT (user_id, prompt_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(prompt_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a bookmark. Returns `true` if one existed.
    pub async fn delete(
        pool: &PgPool,
        user_id: EntityId,
        prompt_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND prompt_id = $2")
            .bind(user_id)
            .bind(prompt_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a bookmark row, `None` when the user has not saved the prompt.
    pub async fn find(
        pool: &PgPool,
        user_id: EntityId,
        prompt_id: EntityId,
    ) -> Result<Option<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            "SELECT user_id, prompt_id, created_at FROM bookmarks \
             WHERE user_id = $1 AND prompt_id = $2",
        )
        .bind(user_id)
        .bind(prompt_id)
        .fetch_optional(pool)
        .await
    }
}
