//! Platform Crate - Technical Infrastructure
//!
//! Technical building blocks with no quiz or account vocabulary:
//! - Password hashing (Argon2id)
//! - Signed opaque tokens (HMAC-SHA256)
//! - `Authorization` header parsing
//! - Random bytes / base64 helpers

pub mod authorization;
pub mod crypto;
pub mod password;
pub mod token;
