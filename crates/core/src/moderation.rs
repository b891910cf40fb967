//! Moderation action constants and validation (PRD-6).
//!
//! Defines the action values an administrator may apply to a prompt and the
//! status each action moves it into. The machine does not check the source
//! state: re-applying a state the prompt is already in is accepted, and
//! concurrent actions on the same prompt resolve last-write-wins on the
//! status column.

use crate::status::{STATUS_APPROVED, STATUS_ARCHIVED, STATUS_REJECTED};

/// Prompt is published to the public library.
pub const ACTION_APPROVED: &str = "approved";

/// Prompt is rejected and stays out of the public library.
pub const ACTION_REJECTED: &str = "rejected";

/// Prompt is retired from the public library.
pub const ACTION_ARCHIVED: &str = "archived";

/// All action values accepted by the moderation endpoint.
pub const VALID_ACTIONS: &[&str] = &[ACTION_APPROVED, ACTION_REJECTED, ACTION_ARCHIVED];

/// Resolve the status a prompt ends up in after applying `action`.
///
/// Action values are named after their target states. Unknown values are
/// rejected with a message listing the accepted ones.
pub fn target_status(action: &str) -> Result<&'static str, String> {
    match action {
        ACTION_APPROVED => Ok(STATUS_APPROVED),
        ACTION_REJECTED => Ok(STATUS_REJECTED),
        ACTION_ARCHIVED => Ok(STATUS_ARCHIVED),
        _ => Err(format!(
            "Invalid action '{action}'. Must be one of: {}",
            VALID_ACTIONS.join(", ")
        )),
    }
}
