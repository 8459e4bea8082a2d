//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenSigner;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime; `None` keeps tokens valid until logout
    pub session_ttl: Option<Duration>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            session_ttl: None,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Random secret, no TTL, no pepper. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn with_session_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.session_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(self.session_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(
            AuthConfig::with_random_secret().session_secret,
            AuthConfig::with_random_secret().session_secret
        );
    }

    #[test]
    fn test_ttl_conversion() {
        let config = AuthConfig::development().with_session_ttl(Some(Duration::from_secs(90)));
        assert_eq!(config.session_ttl_chrono(), Some(chrono::Duration::seconds(90)));
        assert_eq!(AuthConfig::default().session_ttl_chrono(), None);
    }

    #[test]
    fn test_pepper() {
        let config = AuthConfig::default().with_pepper(Some(b"pep".to_vec()));
        assert_eq!(config.pepper(), Some(&b"pep"[..]));
    }
}
