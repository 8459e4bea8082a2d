//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a random 32-byte key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    key
}

pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Compute HMAC-SHA256 over `data`
pub fn hmac_sha256(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Verify an HMAC-SHA256 tag in constant time
pub fn verify_hmac_sha256(key: &[u8; 32], data: &[u8], tag: &[u8]) -> bool {
    let Ok(mut mac) = <HmacSha256 as Mac>::new_from_slice(key) else {
        return false;
    };
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_random_key_differs() {
        assert_ne!(random_key(), random_key());
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        assert_eq!(from_base64(&to_base64(data)).unwrap(), data);
        assert_eq!(from_base64_url(&to_base64_url(data)).unwrap(), data);
    }

    #[test]
    fn test_hmac_sign_and_verify() {
        let key = [0x0bu8; 32];
        let tag = hmac_sha256(&key, b"Hi There");
        assert!(verify_hmac_sha256(&key, b"Hi There", &tag));
        assert!(!verify_hmac_sha256(&key, b"Hi there", &tag));
    }

    #[test]
    fn test_hmac_depends_on_key() {
        let data = b"session";
        assert_ne!(hmac_sha256(&[1u8; 32], data), hmac_sha256(&[2u8; 32], data));
        assert_eq!(hmac_sha256(&[1u8; 32], data), hmac_sha256(&[1u8; 32], data));
    }

    #[test]
    fn test_verify_rejects_truncated_tag() {
        let key = [7u8; 32];
        let tag = hmac_sha256(&key, b"abc");
        assert!(!verify_hmac_sha256(&key, b"abc", &tag[..16]));
    }
}
