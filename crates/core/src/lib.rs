//! Domain vocabulary and pure validation for the PromptDeck service.
//!
//! This crate has no I/O and no async: it defines the status, action, and
//! role vocabularies, the submission field validator, and the error taxonomy
//! shared by the DB and API layers.

pub mod audit;
pub mod error;
pub mod moderation;
pub mod roles;
pub mod status;
pub mod submission;
pub mod types;

pub use error::CoreError;
pub use types::{EntityId, Timestamp};
