//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a required text field carries at least one
/// non-whitespace character.
///
/// # Examples
///
/// ```ignore
/// validate_required_text("Football", "game_required") // Ok
/// validate_required_text("   ", "game_required")      // Err - blank
/// validate_required_text("", "game_required")         // Err - empty
/// ```
pub fn validate_required_text(value: &str, code: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new(code);
        err.message = Some("value must not be empty or whitespace".into());
        return Err(err);
    }

    Ok(())
}
