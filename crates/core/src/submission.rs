//! Submission field validation (PRD-3).
//!
//! Bounds and messages are part of the public contract: the web client
//! renders the messages verbatim next to the form fields, so changing them
//! is a breaking change. Lengths are counted in characters, not bytes.
//!
//! Ownership and status are never validated here because they are never
//! client input: the API binds `owner_id` to the authenticated caller and
//! forces `status` to `pending` at insert time.

use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 120;
pub const CATEGORY_MAX: usize = 5;
pub const ROLE_MAX_LEN: usize = 80;
pub const USE_CASE_MAX_LEN: usize = 500;
pub const PROMPT_TEXT_MIN_LEN: usize = 10;
pub const PROMPT_TEXT_MAX_LEN: usize = 8000;

/// All valid difficulty labels.
pub const VALID_DIFFICULTIES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Validation failures keyed by field name.
///
/// Serializes to `{"title": ["Title must be at least 3 characters"], ...}`
/// for the 422 response body.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field; empty when the field passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A submission as received from the client, before owner and status binding.
pub struct NewSubmission<'a> {
    pub title: &'a str,
    pub category: &'a [String],
    pub role: Option<&'a str>,
    pub use_case: Option<&'a str>,
    pub prompt_text: &'a str,
    pub model_compatibility: &'a [String],
    pub difficulty: &'a str,
}

/// Validate every field, collecting all failures instead of stopping at the
/// first so the client can annotate the whole form in one round trip.
pub fn validate_submission(input: &NewSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let title_len = input.title.chars().count();
    if title_len < TITLE_MIN_LEN {
        errors.push(
            "title",
            format!("Title must be at least {TITLE_MIN_LEN} characters"),
        );
    } else if title_len > TITLE_MAX_LEN {
        errors.push(
            "title",
            format!("Title must be under {TITLE_MAX_LEN} characters"),
        );
    }

    if input.category.is_empty() {
        errors.push("category", "At least one category is required");
    } else if input.category.len() > CATEGORY_MAX {
        errors.push(
            "category",
            format!("Maximum {CATEGORY_MAX} categories allowed"),
        );
    }

    if let Some(role) = input.role {
        if role.chars().count() > ROLE_MAX_LEN {
            errors.push("role", format!("Role must be under {ROLE_MAX_LEN} characters"));
        }
    }

    if let Some(use_case) = input.use_case {
        if use_case.chars().count() > USE_CASE_MAX_LEN {
            errors.push(
                "use_case",
                format!("Use case must be under {USE_CASE_MAX_LEN} characters"),
            );
        }
    }

    let prompt_len = input.prompt_text.chars().count();
    if prompt_len < PROMPT_TEXT_MIN_LEN {
        errors.push(
            "prompt_text",
            format!("Prompt must be at least {PROMPT_TEXT_MIN_LEN} characters"),
        );
    } else if prompt_len > PROMPT_TEXT_MAX_LEN {
        errors.push(
            "prompt_text",
            format!("Prompt must be under {PROMPT_TEXT_MAX_LEN} characters"),
        );
    }

    if !VALID_DIFFICULTIES.contains(&input.difficulty) {
        errors.push(
            "difficulty",
            format!(
                "Invalid difficulty '{}'. Must be one of: {}",
                input.difficulty,
                VALID_DIFFICULTIES.join(", ")
            ),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
