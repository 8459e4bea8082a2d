//! Email Value Object
//!
//! Contact address attached to an account. Optional at registration, so the
//! empty string is a valid value. The format is not checked: any string up to
//! the column length is stored, only the domain part is normalized.

use serde::Serialize;
use std::fmt;

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    TooLong { length: usize, max: usize },
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { max, .. } => write!(f, "Email must be at most {max} characters"),
        }
    }
}

impl std::error::Error for EmailError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Trim, then lower-case the part after the last `@` (if any); the local
    /// part keeps its case
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Ok(Self::default());
        }

        let length = email.chars().count();
        if length > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                length,
                max: EMAIL_MAX_LENGTH,
            });
        }

        match email.rsplit_once('@') {
            Some((local, domain)) => Ok(Self(format!("{}@{}", local, domain.to_lowercase()))),
            None => Ok(Self(email.to_string())),
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_empty_is_allowed() {
        let email = Email::new("   ").unwrap();
        assert!(email.is_empty());
        assert_eq!(email.as_str(), "");
    }

    #[test]
    fn test_format_is_not_checked() {
        assert_eq!(Email::new("not-an-email").unwrap().as_str(), "not-an-email");
        assert_eq!(Email::new("user@").unwrap().as_str(), "user@");
        assert_eq!(Email::new("@Example.com").unwrap().as_str(), "@example.com");
        assert_eq!(Email::new("not-an-email").unwrap().domain(), "");
    }

    #[test]
    fn test_domain_is_lowercased_local_part_kept() {
        let email = Email::new(" John.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "John.Doe@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_too_long() {
        let long = format!("{}@example.com", "a".repeat(EMAIL_MAX_LENGTH));
        assert!(matches!(Email::new(long), Err(EmailError::TooLong { .. })));
    }
}
