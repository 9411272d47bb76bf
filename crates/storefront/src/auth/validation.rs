//! Client-side validation for the registration form.
//!
//! The rules run in a fixed order and the first failure wins - the order
//! decides which single message a user sees when several fields are wrong,
//! so it is part of the contract, not an implementation detail.

use thiserror::Error;

/// Minimum length for usernames and passwords.
const MIN_FIELD_LENGTH: usize = 6;

/// What the user typed into the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// First validation rule the form fails, if any.
///
/// Display strings match the storefront's user-facing copy exactly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is a required field")]
    UsernameRequired,
    #[error("Username must be at least 6 characters")]
    UsernameTooShort,
    #[error("Password is a required field")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Validate a registration form.
///
/// Rule order: username present, username length, password present,
/// password length, confirm matches password (exact, case-sensitive).
/// Remaining rules are not evaluated once one fails.
///
/// # Errors
///
/// Returns the first failing rule's [`ValidationError`].
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if form.username.chars().count() < MIN_FIELD_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }
    if form.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if form.password.chars().count() < MIN_FIELD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(validate(&form("abcdef", "abcdef", "abcdef")), Ok(()));
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(
            validate(&form("", "abcdef", "abcdef")),
            Err(ValidationError::UsernameRequired)
        );
    }

    #[test]
    fn test_short_username_wins_over_later_rules() {
        // Later rules would pass; the first failing rule is still reported.
        assert_eq!(
            validate(&form("ab", "abcdef", "abcdef")),
            Err(ValidationError::UsernameTooShort)
        );
        // Later rules would also fail; ordering is unchanged.
        assert_eq!(
            validate(&form("ab", "", "xyz")),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(
            validate(&form("abcdef", "", "")),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_short_password() {
        assert_eq!(
            validate(&form("abcdef", "abc", "abc")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_mismatch() {
        assert_eq!(
            validate(&form("abcdef", "abcdef", "xyz")),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_password_comparison_is_case_sensitive() {
        assert_eq!(
            validate(&form("abcdef", "abcdef", "Abcdef")),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_error_copy_matches_ui_strings() {
        assert_eq!(
            ValidationError::UsernameRequired.to_string(),
            "Username is a required field"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
