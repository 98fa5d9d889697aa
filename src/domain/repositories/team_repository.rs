use async_trait::async_trait;

use super::RepositoryResult;
use crate::domain::team::{NewTeam, Team, TeamId};
use crate::domain::user::User;

/// Repository trait for teams and their membership
///
/// Implementations must be safe to call concurrently from many requests.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist a new team and return it with its assigned id
    ///
    /// A failed create must not leave a partial row behind.
    async fn create(&self, team: NewTeam) -> RepositoryResult<Team>;

    /// Replace the team's member set with exactly `users`
    async fn update_users(&self, team_id: TeamId, users: &[User]) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;

    /// Current members of a team
    async fn find_users(&self, team_id: TeamId) -> RepositoryResult<Vec<User>>;

    /// Delete a team and its membership rows
    async fn delete(&self, id: TeamId) -> RepositoryResult<()>;
}
