//! Repository for the `profiles` table.

use promptdeck_core::types::EntityId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, display_name, role, created_at";

/// Provides lookup and provisioning operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile row.
    ///
    /// Provisioning normally happens out of band when an account first signs
    /// in through the identity provider; this is used by seeds and tests.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, display_name, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.id)
            .bind(&input.display_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by identity id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Role for an identity, `None` when no profile row exists.
    ///
    /// Called on every privileged request: the role must come from the store,
    /// not from the session token, so revocation is immediate.
    pub async fn find_role(pool: &PgPool, id: EntityId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT role FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
