//! Profile entity model.

use promptdeck_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user profile mirrored from the identity provider.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: EntityId,
    pub display_name: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a profile row.
///
/// The id comes from the identity provider, not from the database.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub id: EntityId,
    pub display_name: Option<String>,
    pub role: String,
}
