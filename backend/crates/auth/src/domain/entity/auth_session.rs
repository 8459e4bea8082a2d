//! Auth Session Entity
//!
//! Server-side record behind a session token. Deleting the row revokes the
//! token.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{AccountId, SessionId};

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
    /// `None` means the session never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(account_id: AccountId, ttl: Option<Duration>) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            account_id,
            created_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_without_ttl_never_expires() {
        let session = AuthSession::new(AccountId::new(), None);
        assert!(session.expires_at.is_none());
        assert!(!session.is_expired_at(Utc::now() + Duration::days(36500)));
    }

    #[test]
    fn test_session_with_ttl() {
        let session = AuthSession::new(AccountId::new(), Some(Duration::hours(1)));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(session.created_at + Duration::hours(1)));
        assert!(!session.is_expired_at(session.created_at + Duration::minutes(59)));
    }
}
