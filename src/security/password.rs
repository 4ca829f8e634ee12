/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;

use crate::error::{AppError, Result};

/// Digest of a throwaway password. Login verifies against this when the
/// username does not resolve, so the unknown-user path performs the same
/// argon2 work as a real verification.
static DUMMY_DIGEST: Lazy<String> = Lazy::new(|| {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(b"timing-equalization-placeholder", &salt)
        .expect("hashing the hardcoded placeholder failed - fix source code")
        .to_string()
});

/// Hash a password using Argon2id with a fresh random salt.
/// Returns a PHC-formatted hash string suitable for database storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let digest = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();

    Ok(digest)
}

/// Verify a password against a stored PHC-formatted digest.
///
/// Mismatch is a normal `Ok(false)`; only a malformed digest or a primitive
/// failure surfaces as an error.
pub fn verify_password(password: &str, digest: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(digest)
        .map_err(|e| AppError::Internal(format!("Invalid password hash format: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Run a verification that always reports a mismatch while doing real work.
pub fn verify_dummy(password: &str) -> Result<bool> {
    verify_password(password, &DUMMY_DIGEST).map(|_| false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "Password1";
        let hash = hash_password(password).expect("should hash password successfully");
        assert!(verify_password(password, &hash).expect("should verify successfully"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let password = "Password1";
        let hash = hash_password(password).expect("should hash password successfully");
        assert!(!verify_password("Password2", &hash).expect("verification should succeed"));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "Password1";
        let hash1 = hash_password(password).expect("should hash successfully");
        let hash2 = hash_password(password).expect("should hash successfully");
        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_against_malformed_digest() {
        assert!(verify_password("Password1", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_dummy_verification_never_matches() {
        assert!(!verify_dummy("Password1").expect("dummy verification should succeed"));
        // Even the placeholder plaintext itself must not authenticate
        assert!(!verify_dummy("timing-equalization-placeholder")
            .expect("dummy verification should succeed"));
    }
}
