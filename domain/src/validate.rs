//! Lightweight input validation helpers. Keep logic minimal and deterministic.

use crate::CoreError;

/// Validate a required text field: it must contain something other than
/// whitespace. The value is stored as given; only the check trims.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validate an ordered ingredient list. The list itself may be empty, but
/// every entry must be a non-blank string.
pub fn validate_ingredients(ingredients: &[String]) -> Result<(), CoreError> {
    if let Some(pos) = ingredients.iter().position(|i| i.trim().is_empty()) {
        return Err(CoreError::InvalidInput(format!(
            "ingredients[{}] must not be empty",
            pos
        )));
    }
    Ok(())
}
