//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. All SQL lives here; handlers
//! never build queries.

pub mod audit_repo;
pub mod bookmark_repo;
pub mod profile_repo;
pub mod prompt_repo;

pub use audit_repo::AuditLogRepo;
pub use bookmark_repo::BookmarkRepo;
pub use profile_repo::ProfileRepo;
pub use prompt_repo::PromptRepo;
