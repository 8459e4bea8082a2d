//! Signed Opaque Tokens
//!
//! Token format: `<payload>.<base64url(HMAC-SHA256(secret, payload))>`.
//! The payload is an identifier chosen by the caller (a session UUID for auth).
//! Signing is deterministic, so re-signing the same payload yields the same
//! token string.

use thiserror::Error;

use crate::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

const SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    BadSignature,
}

/// Signs and verifies tokens with a single 32-byte key
#[derive(Clone)]
pub struct TokenSigner {
    secret: [u8; 32],
}

impl TokenSigner {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn sign(&self, payload: &str) -> String {
        let signature = hmac_sha256(&self.secret, payload.as_bytes());
        format!("{}{}{}", payload, SEPARATOR, to_base64_url(&signature))
    }

    /// Verify the signature and return the payload
    pub fn verify<'a>(&self, token: &'a str) -> Result<&'a str, TokenError> {
        let (payload, signature_b64) = token.split_once(SEPARATOR).ok_or(TokenError::Malformed)?;

        if payload.is_empty() || signature_b64.contains(SEPARATOR) {
            return Err(TokenError::Malformed);
        }

        let signature = from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;

        if !verify_hmac_sha256(&self.secret, payload.as_bytes(), &signature) {
            return Err(TokenError::BadSignature);
        }

        Ok(payload)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_then_verify() {
        let signer = TokenSigner::new([9u8; 32]);
        let token = signer.sign("abc-123");
        assert!(token.starts_with("abc-123."));
        assert_eq!(signer.verify(&token), Ok("abc-123"));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = TokenSigner::new([9u8; 32]);
        assert_eq!(signer.sign("payload"), signer.sign("payload"));
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let token = TokenSigner::new([1u8; 32]).sign("payload");
        let other = TokenSigner::new([2u8; 32]);
        assert_eq!(other.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let signer = TokenSigner::new([1u8; 32]);
        let token = signer.sign("alice");
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("mallory.{}", sig);
        assert_eq!(signer.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        let signer = TokenSigner::new([1u8; 32]);
        assert_eq!(signer.verify("no-separator"), Err(TokenError::Malformed));
        assert_eq!(signer.verify(".sig"), Err(TokenError::Malformed));
        assert_eq!(signer.verify("a.b.c"), Err(TokenError::Malformed));
        assert_eq!(signer.verify("a.!!!"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = TokenSigner::new([42u8; 32]);
        assert!(format!("{:?}", signer).contains("REDACTED"));
    }
}
