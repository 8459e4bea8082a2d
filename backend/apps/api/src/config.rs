//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `allow_random_secret` lets a missing `AUTH_SESSION_SECRET` fall back to
    /// a random key (debug builds)
    pub fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let mut auth = match lookup("AUTH_SESSION_SECRET") {
            Some(secret_b64) => AuthConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            None if allow_random_secret => {
                tracing::warn!("AUTH_SESSION_SECRET not set, using a random key");
                AuthConfig::with_random_secret()
            }
            None => bail!("AUTH_SESSION_SECRET must be set in production"),
        };

        if let Some(raw) = lookup("AUTH_SESSION_TTL_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .context("AUTH_SESSION_TTL_SECS must be a number of seconds")?;
            auth = auth.with_session_ttl(Some(Duration::from_secs(secs)));
        }

        if let Some(pepper) = lookup("AUTH_PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            auth = auth.with_pepper(Some(pepper.into_bytes()));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_SESSION_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("AUTH_SESSION_SECRET must be 32 bytes, got {}", b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/quiz")]), true)
                .unwrap();

        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert!(config.auth.session_ttl.is_none());
        assert!(config.auth.password_pepper.is_none());
    }

    #[test]
    fn test_database_url_is_required() {
        assert!(ServerConfig::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_secret_required_without_fallback() {
        let result = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")]), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_auth_settings() {
        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://db"),
                ("AUTH_SESSION_SECRET", secret.as_str()),
                ("AUTH_SESSION_TTL_SECS", "3600"),
                ("AUTH_PASSWORD_PEPPER", "pepper"),
                ("FRONTEND_ORIGINS", " https://quiz.example , ,"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.auth.session_secret, [7u8; 32]);
        assert_eq!(config.auth.session_ttl, Some(Duration::from_secs(3600)));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.frontend_origins, vec!["https://quiz.example"]);
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let secret = general_purpose::STANDARD.encode([1u8; 16]);
        let result = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://db"), ("AUTH_SESSION_SECRET", secret.as_str())]),
            false,
        );
        assert!(result.is_err());
    }
}
