//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where one is needed
//! - Read-side projections for surfaces that must not expose the full row

pub mod audit;
pub mod bookmark;
pub mod profile;
pub mod prompt;
