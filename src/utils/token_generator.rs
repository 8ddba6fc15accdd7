//! Auth token generation.
//!
//! Raw tokens are handed to the client exactly once; only their keyed hash is
//! stored (see [`crate::application::services::AuthService`]).

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 36 bytes encode to a 48-character token (~288 bits of entropy).
const TOKEN_LENGTH_BYTES: usize = 36;

/// Generates a cryptographically secure opaque auth token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 48-character token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_not_empty() {
        assert!(!generate_token().is_empty());
    }

    #[test]
    fn test_generate_token_has_correct_length() {
        assert_eq!(generate_token().len(), 48);
    }

    #[test]
    fn test_generate_token_url_safe_characters() {
        let token = generate_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_token_no_padding() {
        assert!(!generate_token().contains('='));
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            tokens.insert(generate_token());
        }

        assert_eq!(tokens.len(), 1000);
    }
}
