//! Account Entity
//!
//! A registered player. Credentials live in [`super::credential::Credential`].

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AccountId, email::Email, user_name::UserName};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Unique, case-sensitive login handle
    pub user_name: UserName,
    /// May be empty
    pub email: Email,
    /// Inactive accounts cannot log in and their tokens are rejected
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(user_name: UserName, email: Email) -> Self {
        Self {
            account_id: AccountId::new(),
            user_name,
            email,
            is_active: true,
            date_joined: Utc::now(),
            last_login_at: None,
        }
    }

    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account = Account::new(UserName::new("alice").unwrap(), Email::default());
        assert!(account.can_login());
        assert!(account.last_login_at.is_none());
    }

    #[test]
    fn test_record_login() {
        let mut account = Account::new(UserName::new("alice").unwrap(), Email::default());
        account.record_login();
        assert!(account.last_login_at.is_some());
    }
}
