//! PostgreSQL Repository Implementations

use auth::AccountId;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entities::{NewScore, PlayerProfile, ScoreRecord};
use crate::domain::repository::{ProfileRepository, ScoreRepository, SubmissionRepository};
use crate::domain::value_objects::{Difficulty, PlayerName, ScoreId};
use crate::error::{QuizError, QuizResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the profile row if it does not exist yet
    async fn insert_profile_if_missing<'e, E>(executor: E, owner: &AccountId) -> QuizResult<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let fresh = PlayerProfile::new(*owner);

        sqlx::query(
            r#"
            INSERT INTO player_profiles (
                account_id,
                total_games,
                best_score,
                total_correct,
                total_wrong,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (account_id) DO NOTHING
            "#,
        )
        .bind(fresh.owner.as_uuid())
        .bind(fresh.total_games)
        .bind(fresh.best_score)
        .bind(fresh.total_correct)
        .bind(fresh.total_wrong)
        .bind(fresh.created_at)
        .bind(fresh.updated_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Fold the new record into the owner's profile under a row lock
    async fn apply_to_profile(
        tx: &mut Transaction<'_, Postgres>,
        submission: &NewScore,
        owner: &AccountId,
    ) -> QuizResult<PlayerProfile> {
        Self::insert_profile_if_missing(&mut **tx, owner).await?;

        let mut profile = sqlx::query_as::<_, PlayerProfileRow>(
            r#"
            SELECT
                account_id,
                total_games,
                best_score,
                total_correct,
                total_wrong,
                created_at,
                updated_at
            FROM player_profiles
            WHERE account_id = $1
            FOR UPDATE
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_one(&mut **tx)
        .await?
        .into_profile();

        profile.apply_result(submission.tally);

        sqlx::query(
            r#"
            UPDATE player_profiles SET
                total_games = $2,
                best_score = $3,
                total_correct = $4,
                total_wrong = $5,
                updated_at = $6
            WHERE account_id = $1
            "#,
        )
        .bind(owner.as_uuid())
        .bind(profile.total_games)
        .bind(profile.best_score)
        .bind(profile.total_correct)
        .bind(profile.total_wrong)
        .bind(profile.updated_at)
        .execute(&mut **tx)
        .await?;

        Ok(profile)
    }
}

impl ScoreRepository for PgQuizRepository {
    async fn top_scores(
        &self,
        limit: i64,
        difficulty: Option<&str>,
    ) -> QuizResult<Vec<ScoreRecord>> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT
                id,
                player_name,
                score,
                wrong,
                difficulty,
                created_at,
                account_id
            FROM quiz_scores
            WHERE ($2::TEXT IS NULL OR difficulty = $2)
            ORDER BY score DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(difficulty)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScoreRow::into_record).collect())
    }

    async fn sum_scores_by_owner(&self, owner: &AccountId) -> QuizResult<i64> {
        let sum = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(score), 0)::BIGINT FROM quiz_scores WHERE account_id = $1",
        )
        .bind(owner.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(sum)
    }
}

impl ProfileRepository for PgQuizRepository {
    async fn ensure(&self, owner: &AccountId) -> QuizResult<PlayerProfile> {
        Self::insert_profile_if_missing(&self.pool, owner).await?;

        self.find(owner)
            .await?
            .ok_or_else(|| QuizError::Internal(format!("Profile for {} vanished", owner)))
    }

    async fn find(&self, owner: &AccountId) -> QuizResult<Option<PlayerProfile>> {
        let row = sqlx::query_as::<_, PlayerProfileRow>(
            r#"
            SELECT
                account_id,
                total_games,
                best_score,
                total_correct,
                total_wrong,
                created_at,
                updated_at
            FROM player_profiles
            WHERE account_id = $1
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlayerProfileRow::into_profile))
    }
}

impl SubmissionRepository for PgQuizRepository {
    async fn record_submission(
        &self,
        submission: &NewScore,
    ) -> QuizResult<(ScoreRecord, Option<PlayerProfile>)> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, ScoreRow>(
            r#"
            INSERT INTO quiz_scores (
                player_name,
                score,
                wrong,
                difficulty,
                created_at,
                account_id
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id,
                player_name,
                score,
                wrong,
                difficulty,
                created_at,
                account_id
            "#,
        )
        .bind(submission.player_name.as_str())
        .bind(submission.tally.score)
        .bind(submission.tally.wrong)
        .bind(submission.difficulty.as_str())
        .bind(Utc::now())
        .bind(submission.owner.map(|owner| owner.into_uuid()))
        .fetch_one(&mut *tx)
        .await?
        .into_record();

        let profile = match &submission.owner {
            Some(owner) => Some(Self::apply_to_profile(&mut tx, submission, owner).await?),
            None => None,
        };

        tx.commit().await?;

        Ok((record, profile))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ScoreRow {
    id: i64,
    player_name: String,
    score: i32,
    wrong: i32,
    difficulty: String,
    created_at: DateTime<Utc>,
    account_id: Option<Uuid>,
}

impl ScoreRow {
    fn into_record(self) -> ScoreRecord {
        ScoreRecord {
            id: ScoreId::new(self.id),
            player_name: PlayerName::from_db(self.player_name),
            score: self.score,
            wrong: self.wrong,
            difficulty: Difficulty::from_db(self.difficulty),
            created_at: self.created_at,
            owner: self.account_id.map(AccountId::from_uuid),
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlayerProfileRow {
    account_id: Uuid,
    total_games: i64,
    best_score: i32,
    total_correct: i64,
    total_wrong: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerProfileRow {
    fn into_profile(self) -> PlayerProfile {
        PlayerProfile {
            owner: AccountId::from_uuid(self.account_id),
            total_games: self.total_games,
            best_score: self.best_score,
            total_correct: self.total_correct,
            total_wrong: self.total_wrong,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
