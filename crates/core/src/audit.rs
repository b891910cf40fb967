//! Audit trail vocabulary and listing bounds (PRD-7).
//!
//! The audit log is append-only: an entry is written once, at the moment a
//! moderation action is accepted, and never updated or deleted. This module
//! lives in `core` (zero internal deps) so the vocabulary is shared by the
//! DB and API layers.

// ---------------------------------------------------------------------------
// Action constants
// ---------------------------------------------------------------------------

/// Known action values for audit log entries.
///
/// `RESTORED` and `DELETED` are reserved: they satisfy the CHECK constraint
/// on `audit_log.action` but no endpoint currently emits them.
pub mod action_types {
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";
    pub const ARCHIVED: &str = "archived";
    pub const RESTORED: &str = "restored";
    pub const DELETED: &str = "deleted";
}

/// All valid audit action values.
pub const VALID_ACTIONS: &[&str] = &[
    action_types::APPROVED,
    action_types::REJECTED,
    action_types::ARCHIVED,
    action_types::RESTORED,
    action_types::DELETED,
];

// ---------------------------------------------------------------------------
// Listing bounds
// ---------------------------------------------------------------------------

/// Default number of entries returned by the recent-audit listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 100;

/// Upper bound on a single recent-audit listing.
pub const MAX_RECENT_LIMIT: i64 = 500;
