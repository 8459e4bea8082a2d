//! User Name Value Object
//!
//! プレイヤーのログイン用ハンドル。プロフィールにもそのまま表示される。
//!
//! ## 不変条件
//! - NFKC正規化 + 前後の空白除去
//! - 長さ: 1〜150文字（正規化後）
//! - 途中の空白・制御文字は禁止
//! - 大文字小文字を区別する（`Alice` と `alice` は別アカウント）

use serde::Serialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains whitespace or a control character
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character {char:?} at position {position}. Spaces and control characters are not allowed"
                )
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated, normalized user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized = Self::normalize(input.as_ref());
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    fn validate(name: &str) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some((position, char)) = name
            .chars()
            .enumerate()
            .find(|(_, c)| c.is_whitespace() || c.is_control())
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim_whitespace() {
            let name = UserName::new("  alice  ").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_case_is_preserved() {
            let name = UserName::new("AlIcE_123").unwrap();
            assert_eq!(name.as_str(), "AlIcE_123");
            assert_ne!(name, UserName::new("alice_123").unwrap());
        }

        #[test]
        fn test_nfkc_normalization() {
            // Full-width 'Ａ' (U+FF21) becomes ASCII 'A'
            let name = UserName::new("Ａlice").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }

        #[test]
        fn test_idempotent() {
            let first = UserName::new("  quiz.master+1@home  ").unwrap();
            let second = UserName::new(first.as_str()).unwrap();
            assert_eq!(first, second);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert_eq!(UserName::new(""), Err(UserNameError::Empty));
            assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
        }

        #[test]
        fn test_single_char_is_allowed() {
            assert!(UserName::new("x").is_ok());
        }

        #[test]
        fn test_max_length_boundary() {
            assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
            assert!(matches!(
                UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)),
                Err(UserNameError::TooLong { length: 151, max: 150 })
            ));
        }

        #[test]
        fn test_inner_whitespace_fails() {
            assert!(matches!(
                UserName::new("john doe"),
                Err(UserNameError::InvalidCharacter { char: ' ', position: 4 })
            ));
        }

        #[test]
        fn test_control_character_fails() {
            assert!(matches!(
                UserName::new("bad\u{0007}name"),
                Err(UserNameError::InvalidCharacter { .. })
            ));
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");
    }
}
