//! Bookmark entity model.

use promptdeck_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A bookmark row. Existence is the whole state: there is nothing to update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bookmark {
    pub user_id: EntityId,
    pub prompt_id: EntityId,
    pub created_at: Timestamp,
}
