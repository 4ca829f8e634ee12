/// Unit tests for input validators
///
/// This test module covers:
/// - Email format validation
/// - Username format validation
/// - Password strength requirements
/// - Edge cases and boundary conditions
use event_manager::validators::{validate_email, validate_password, validate_username};

// ============================================================================
// Email Validation Tests
// ============================================================================

#[test]
fn test_valid_email_formats() {
    assert!(validate_email("user@example.com"));
    assert!(validate_email("test.user@example.com"));
    assert!(validate_email("user+tag@example.co.uk"));
    assert!(validate_email("user_name@sub.domain.com"));
    assert!(validate_email("a@b.co"));
}

#[test]
fn test_invalid_email_missing_at() {
    assert!(!validate_email("userexample.com"));
}

#[test]
fn test_invalid_email_missing_domain() {
    assert!(!validate_email("user@"));
}

#[test]
fn test_invalid_email_missing_local_part() {
    assert!(!validate_email("@example.com"));
}

#[test]
fn test_invalid_email_missing_tld() {
    assert!(!validate_email("user@example"));
}

#[test]
fn test_invalid_email_multiple_at_signs() {
    assert!(!validate_email("user@domain@example.com"));
}

#[test]
fn test_invalid_email_empty_string() {
    assert!(!validate_email(""));
}

#[test]
fn test_invalid_email_spaces() {
    assert!(!validate_email("user @example.com"));
    assert!(!validate_email("user@ example.com"));
}

// ============================================================================
// Username Validation Tests
// ============================================================================

#[test]
fn test_valid_username_formats() {
    assert!(validate_username("abc"));
    assert!(validate_username("user123"));
    assert!(validate_username("ABC123"));
    assert!(validate_username("Turtle2024"));
}

#[test]
fn test_invalid_username_too_short() {
    assert!(!validate_username("ab")); // 2 chars
    assert!(!validate_username("a")); // 1 char
    assert!(!validate_username("")); // 0 chars
}

#[test]
fn test_valid_username_boundary_3_chars() {
    assert!(validate_username("abc"));
}

#[test]
fn test_valid_username_boundary_20_chars() {
    assert!(validate_username(&"a".repeat(20)));
}

#[test]
fn test_invalid_username_too_long() {
    assert!(!validate_username(&"a".repeat(21))); // 21 chars
}

#[test]
fn test_invalid_username_invalid_characters() {
    assert!(!validate_username("user name"));
    assert!(!validate_username("user_name"));
    assert!(!validate_username("user-name"));
    assert!(!validate_username("user.name"));
    assert!(!validate_username("user@name"));
    assert!(!validate_username("user!"));
}

// ============================================================================
// Password Strength Tests
// ============================================================================

#[test]
fn test_valid_password_all_requirements_met() {
    assert!(validate_password("Password1"));
    assert!(validate_password("MyPassw0rd"));
    assert!(validate_password("T3stPassword"));
}

#[test]
fn test_invalid_password_too_short() {
    assert!(!validate_password("Pass1ab")); // 7 chars
}

#[test]
fn test_valid_password_exactly_8_chars() {
    assert!(validate_password("Passw0rd"));
}

#[test]
fn test_invalid_password_no_uppercase() {
    assert!(!validate_password("password1"));
}

#[test]
fn test_invalid_password_no_lowercase() {
    assert!(!validate_password("PASSWORD1"));
}

#[test]
fn test_invalid_password_no_digit() {
    assert!(!validate_password("Passwords"));
}

#[test]
fn test_valid_password_special_characters_not_required() {
    assert!(validate_password("Password1"));
    assert!(validate_password("Password1!"));
}

#[test]
fn test_invalid_password_empty() {
    assert!(!validate_password(""));
}

// ============================================================================
// Combination Tests
// ============================================================================

#[test]
fn test_typical_user_registration_valid() {
    let email = "jane.doe@example.com";
    let username = "janedoe";
    let password = "SecurePassword123";

    assert!(validate_email(email), "Email should be valid");
    assert!(validate_username(username), "Username should be valid");
    assert!(validate_password(password), "Password should be valid");
}

#[test]
fn test_typical_user_registration_invalid_password() {
    let email = "john@example.com";
    let username = "john123";
    let password = "weakpass"; // Missing uppercase and digit

    assert!(validate_email(email), "Email should be valid");
    assert!(validate_username(username), "Username should be valid");
    assert!(!validate_password(password), "Password should be rejected");
}
