//! Prompt lifecycle status constants.
//!
//! These must match the CHECK constraint on `prompts.status`. The lifecycle
//! is `draft -> pending -> approved | rejected` and `approved -> archived`.
//! `draft` is representable but no endpoint currently produces it: public
//! submissions always enter the library as `pending`.

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_ARCHIVED: &str = "archived";

/// All representable status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_ARCHIVED,
];
