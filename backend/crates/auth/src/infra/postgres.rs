//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{account::Account, auth_session::AuthSession, credential::Credential};
use crate::domain::repository::{AccountRepository, AuthSessionRepository, CredentialRepository};
use crate::domain::value_object::{
    AccountId, SessionId, email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Unique index on `accounts.user_name`
const USER_NAME_UNIQUE_CONSTRAINT: &str = "accounts_user_name_key";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query(
            "DELETE FROM auth_sessions WHERE expires_at IS NOT NULL AND expires_at <= $1",
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

/// Map the user name unique violation onto the domain error
fn map_user_name_conflict(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        let is_unique = db_err.code().as_deref() == Some("23505");
        let on_user_name = db_err
            .constraint()
            .is_none_or(|c| c == USER_NAME_UNIQUE_CONSTRAINT);
        if is_unique && on_user_name {
            return AuthError::UserNameTaken;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAuthRepository {
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                user_name,
                email,
                is_active,
                date_joined,
                last_login_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.user_name.as_str())
        .bind(account.email.as_str())
        .bind(account.is_active)
        .bind(account.date_joined)
        .bind(account.last_login_at)
        .execute(&mut *tx)
        .await
        .map_err(map_user_name_conflict)?;

        sqlx::query(
            r#"
            INSERT INTO auth_credentials (
                account_id,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.account_id.as_uuid())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                user_name,
                email,
                is_active,
                date_joined,
                last_login_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                user_name,
                email,
                is_active,
                date_joined,
                last_login_at
            FROM accounts
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE user_name = $1)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update_last_login(&self, account: &Account) -> AuthResult<()> {
        sqlx::query("UPDATE accounts SET last_login_at = $2 WHERE account_id = $1")
            .bind(account.account_id.as_uuid())
            .bind(account.last_login_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                account_id,
                password_hash,
                created_at,
                updated_at
            FROM auth_credentials
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRow::into_credential).transpose()
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                account_id,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.account_id.as_uuid())
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                account_id,
                created_at,
                expires_at
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn find_latest_for_account(
        &self,
        account_id: &AccountId,
    ) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                account_id,
                created_at,
                expires_at
            FROM auth_sessions
            WHERE account_id = $1
              AND (expires_at IS NULL OR expires_at > $2)
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all_for_account(&self, account_id: &AccountId) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        PgAuthRepository::cleanup_expired(self).await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    user_name: String,
    email: String,
    is_active: bool,
    date_joined: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            account_id: AccountId::from_uuid(self.account_id),
            user_name: UserName::from_db(self.user_name),
            email: Email::from_db(self.email),
            is_active: self.is_active,
            date_joined: self.date_joined,
            last_login_at: self.last_login_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    account_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        Ok(Credential {
            account_id: AccountId::from_uuid(self.account_id),
            password_hash: UserPassword::from_db(self.password_hash)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    account_id: Uuid,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: SessionId::from_uuid(self.session_id),
            account_id: AccountId::from_uuid(self.account_id),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}
