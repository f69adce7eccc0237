//! Todo field constraints and validation functions.
//!
//! Used by the `validator` derives on the request DTOs in `todoapp-db`.
//! Lengths are Unicode character counts, matching the `VARCHAR(n)` column
//! semantics of the schema.

use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a todo title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a todo description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a todo title: non-empty after trimming and within the length
/// limit. The surrounding whitespace itself is not an error; it is
/// stripped before the row is persisted.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(field_error("title_empty", "Title cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(field_error(
            "title_too_long",
            format!("Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Validate a todo description: within the length limit. Empty is allowed
/// and is distinct from an absent description.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(field_error(
            "description_too_long",
            format!("Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn field_error(code: &'static str, message: impl Into<std::borrow::Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
