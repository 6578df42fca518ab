use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::config::PasswordPolicy;

/// Input validation utilities for aperture-api

// Compiled once on first use. The pattern is a hardcoded constant.
static HANDLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z._]{1,15}$").expect("hardcoded handle regex is invalid - fix source code")
});

/// Validate a user handle: lowercase letters, dots, and underscores only,
/// 1 to 15 characters. Uppercase letters and digits are rejected.
pub fn validate_handle(handle: &str) -> bool {
    HANDLE_REGEX.is_match(handle)
}

/// validator crate compatible custom validator for the user handle
pub fn validate_handle_shape_validator(handle: &str) -> Result<(), ValidationError> {
    if validate_handle(handle) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_handle"))
    }
}

/// Check a raw password against the configured complexity policy.
///
/// Returns the first failing rule as a human-readable message.
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> Result<(), String> {
    if password.chars().count() < policy.min_len {
        return Err(format!(
            "Password must be at least {} characters long",
            policy.min_len
        ));
    }

    if policy.require_letter && !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter".to_string());
    }

    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }

    if policy.require_upper && !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if policy.require_lower && !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if policy.require_special && !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err("Password must contain at least one special character".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_handle() {
        assert!(validate_handle("jane.doe"));
        assert!(validate_handle("some_user"));
        assert!(validate_handle("a"));
        assert!(validate_handle("..._..."));
    }

    #[test]
    fn test_invalid_handle() {
        assert!(!validate_handle("")); // Empty
        assert!(!validate_handle("Jane.doe")); // Uppercase
        assert!(!validate_handle("jane0")); // Digit
        assert!(!validate_handle("jane doe")); // Space
        assert!(!validate_handle(&"a".repeat(16))); // Too long
    }

    #[test]
    fn test_handle_shape_validator() {
        assert!(validate_handle_shape_validator("jane.doe").is_ok());
        assert!(validate_handle_shape_validator("Jane").is_err());
    }

    #[test]
    fn test_password_default_policy() {
        let policy = PasswordPolicy::default();
        assert!(validate_password("password1", &policy).is_ok());
        assert!(validate_password("abc12345", &policy).is_ok());

        assert!(validate_password("short1", &policy).is_err()); // Too short
        assert!(validate_password("12345678", &policy).is_err()); // No letter
        assert!(validate_password("passwords", &policy).is_err()); // No digit
    }

    #[test]
    fn test_password_strict_policy() {
        let policy = PasswordPolicy {
            min_len: 10,
            require_letter: true,
            require_digit: true,
            require_upper: true,
            require_lower: true,
            require_special: true,
        };
        assert!(validate_password("Aa1!aaaaaa", &policy).is_ok());
        assert!(validate_password("aa1!aaaaaa", &policy).is_err()); // No uppercase
        assert!(validate_password("AA1!AAAAAA", &policy).is_err()); // No lowercase
        assert!(validate_password("Aa1aaaaaaa", &policy).is_err()); // No special
    }

    #[test]
    fn test_password_failure_message_names_rule() {
        let policy = PasswordPolicy::default();
        let err = validate_password("passwords", &policy).unwrap_err();
        assert!(err.contains("digit"));
    }
}
