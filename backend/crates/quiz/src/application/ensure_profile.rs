//! Ensure Profile Use Case
//!
//! Every path that needs a profile goes through here, so there is exactly one
//! place where profiles are created.

use std::sync::Arc;

use auth::AccountId;

use crate::domain::entities::PlayerProfile;
use crate::domain::repository::ProfileRepository;
use crate::error::QuizResult;

pub struct EnsureProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> EnsureProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: &AccountId) -> QuizResult<PlayerProfile> {
        self.repo.ensure(owner).await
    }
}
