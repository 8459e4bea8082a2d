//! User Password Value Object
//!
//! `platform::password` のドメイン用ラッパー。
//! 入力は [`RawPassword`]、保存済みの Argon2id ハッシュは [`UserPassword`]。

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => AuthError::MissingCredentials,
            too_long @ PasswordPolicyError::TooLong { .. } => {
                AuthError::InvalidInput(too_long.to_string())
            }
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Hashed password in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AuthError::Internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AuthError::Internal("Unexpected error during password hashing".to_string())
            }
        })?;

        Ok(Self(hashed))
    }

    /// Parse the PHC string loaded from `auth_credentials`
    pub fn from_db(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification; `pepper` must match the one used for hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("securepass123".to_string()).is_ok());

        assert!(matches!(
            RawPassword::new("".to_string()),
            Err(AuthError::MissingCredentials)
        ));

        use platform::password::MAX_PASSWORD_LENGTH;
        let long_pass = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            RawPassword::new(long_pass),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        assert!(hashed.verify(&raw, None));

        let wrong = RawPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = UserPassword::from_raw(&raw, Some(pepper)).unwrap();

        assert!(hashed.verify(&raw, Some(pepper)));
        assert!(!hashed.verify(&raw, None));
    }

    #[test]
    fn test_from_db_roundtrip() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_db(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));

        assert!(matches!(
            UserPassword::from_db("plaintext"),
            Err(AuthError::Internal(_))
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
    }
}
