//! Request handlers, grouped by resource.
//!
//! Handlers stay thin: extract, authorize, call a repository, wrap the
//! result. All SQL lives in `promptdeck_db`.

pub mod audit;
pub mod bookmarks;
pub mod moderation;
pub mod profile;
pub mod prompts;
pub mod queue;
pub mod submissions;
