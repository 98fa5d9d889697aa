use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::repositories::{
    RepositoryError, RepositoryResult, TeamRepository, UserRepository,
};
use crate::domain::team::{NewTeam, Team, TeamId};
use crate::domain::user::{User, UserId};

#[derive(Debug, Default)]
struct TeamTables {
    last_id: TeamId,
    teams: BTreeMap<TeamId, Team>,
    members: HashMap<TeamId, Vec<User>>,
}

/// In-process TeamRepository
///
/// Ids are assigned sequentially from 1. Membership behaves like the
/// PostgreSQL adapter: a repeated user id is stored once, at its first
/// position.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    tables: RwLock<TeamTables>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored teams
    pub async fn len(&self) -> usize {
        self.tables.read().await.teams.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, team: NewTeam) -> RepositoryResult<Team> {
        let mut tables = self.tables.write().await;
        tables.last_id += 1;

        let team = team.into_persisted(tables.last_id, Utc::now());
        tables.teams.insert(team.id, team.clone());

        Ok(team)
    }

    async fn update_users(&self, team_id: TeamId, users: &[User]) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;

        let team = tables
            .teams
            .get_mut(&team_id)
            .ok_or(RepositoryError::NotFound {
                entity: "Team",
                id: team_id,
            })?;
        team.updated_at = Utc::now();

        let mut seen = HashSet::new();
        let members = users
            .iter()
            .filter(|u| seen.insert(u.id))
            .cloned()
            .collect();
        tables.members.insert(team_id, members);

        Ok(())
    }

    async fn find_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        Ok(self.tables.read().await.teams.get(&id).cloned())
    }

    async fn find_users(&self, team_id: TeamId) -> RepositoryResult<Vec<User>> {
        Ok(self
            .tables
            .read()
            .await
            .members
            .get(&team_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete(&self, id: TeamId) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;

        if tables.teams.remove(&id).is_none() {
            return Err(RepositoryError::NotFound { entity: "Team", id });
        }
        tables.members.remove(&id);

        Ok(())
    }
}

/// In-process UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Loads users from a JSON array of `{"id", "email", "name"}` objects
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Ok(Self::with_users(users))
    }

    /// Inserts or replaces a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
