use once_cell::sync::Lazy;
use regex::Regex;

/// Input validation utilities for the event manager

// Compile regex patterns once at startup
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{3,20}$")
        .expect("hardcoded username regex is invalid - fix source code")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("hardcoded email regex is invalid - fix source code")
});

/// Validate username format (3-20 characters, alphanumeric only)
pub fn validate_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// Validate email format (local@domain.tld shape)
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate password strength
/// Requirements:
/// - Minimum 8 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
pub fn validate_password(password: &str) -> bool {
    if password.len() < 8 {
        return false;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_uppercase && has_lowercase && has_digit
}
