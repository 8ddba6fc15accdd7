//! Password hashing with Argon2id.

use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher as _, SaltString},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a plaintext password with Argon2id and a fresh random salt.
///
/// Returns the PHC-format hash string suitable for storage.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::fill(&mut salt_bytes).expect("Failed to generate random bytes");

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::internal("Failed to hash password", json!({ "reason": e.to_string() })))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal("Failed to hash password", json!({ "reason": e.to_string() })))
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// Returns `false` both for a mismatching password and for an unparseable
/// hash; callers cannot distinguish the two, which is the point.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = hash_password("L0tt0K!ngKar1!").unwrap();

        assert!(verify_password("L0tt0K!ngKar1!", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_password("some-password").unwrap();
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_garbage_hash_is_false() {
        assert!(!verify_password("anything", "not-a-phc-hash"));
    }
}
