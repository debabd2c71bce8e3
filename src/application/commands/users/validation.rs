// src/application/commands/users/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use regex_lite::Regex;
use std::sync::OnceLock;

/// Fixed dash-separated shape: 3-digit prefix, 3 or 4 digits, 4 digits.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{3}-\d{3,4}-\d{4}$").expect("valid phone pattern"))
}

pub fn is_valid_phone_format(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

pub fn confirm_password(password: &str, confirm: &str) -> bool {
    password == confirm
}

pub fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.len() < 8 {
        return Err(ApplicationError::validation(
            "password must be at least 8 characters long",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_format_accepts_dashed_numbers() {
        assert!(is_valid_phone_format("010-1234-5678"));
        assert!(is_valid_phone_format("010-123-4567"));
    }

    #[test]
    fn phone_format_rejects_everything_else() {
        assert!(!is_valid_phone_format("01012345678"));
        assert!(!is_valid_phone_format("010-12-5678"));
        assert!(!is_valid_phone_format("phone"));
        assert!(!is_valid_phone_format(""));
    }

    #[test]
    fn password_confirmation_is_exact() {
        assert!(confirm_password("secret-123", "secret-123"));
        assert!(!confirm_password("secret-123", "secret-124"));
    }
}
