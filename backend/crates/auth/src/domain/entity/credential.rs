//! Credential Entity
//!
//! Password hash for an account, kept apart from [`super::account::Account`]
//! so account reads never load it.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AccountId, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct Credential {
    pub account_id: AccountId,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(account_id: AccountId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
