//! Helpers shared by the per-form validation schemas.

use std::collections::HashMap;

use validator::{ValidationError, ValidationErrors};

/// Collect the first message of every violated field into a
/// `field → message` map.
///
/// Built from the validation library's structured output; field keys are the
/// schema field identifiers, so form components look messages up directly
/// instead of matching on error paths.
#[must_use]
pub fn first_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map_or_else(
                    || format!("{field} is invalid"),
                    ToString::to_string,
                );
            (field.to_string(), message)
        })
        .collect()
}

/// Custom rule: the value consists of ASCII digits only (and is non-empty).
///
/// # Errors
///
/// Returns a `digits_only` validation error carrying the inline message
/// shown next to the field.
pub fn digits_only(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("digits_only").with_message("Hanya boleh angka".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_digit_string() {
        assert!(digits_only("0123456789").is_ok());
    }

    #[test]
    fn should_reject_empty_and_mixed_strings() {
        assert!(digits_only("").is_err());
        assert!(digits_only("12a4").is_err());
        assert!(digits_only("+62812").is_err());
    }

    #[test]
    fn should_keep_only_the_first_message_per_field() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(
                length(min = 1, message = "Wajib diisi"),
                email(message = "Email tidak valid")
            )]
            email: String,
        }

        let probe = Probe {
            email: String::new(),
        };
        let errors = probe.validate().unwrap_err();

        let messages = first_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages.get("email").map(String::as_str), Some("Wajib diisi"));
    }
}
