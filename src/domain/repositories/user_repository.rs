use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::user::{User, UserId};

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
}
