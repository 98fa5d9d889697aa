use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::{NewTeam, Team, TeamId};
use crate::domain::user::{User, UserId};

/// PostgreSQL implementation of TeamRepository
///
/// Teams live in `teams`; membership in `team_users`, keyed by
/// `(team_id, user_id)` with a `position` column recording input order.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: NewTeam) -> RepositoryResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, about, color)
            VALUES ($1, $2, $3)
            RETURNING id, name, about, color, created_at, updated_at
            "#,
        )
        .bind(team.name())
        .bind(team.about())
        .bind(team.color())
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    async fn update_users(&self, team_id: TeamId, users: &[User]) -> RepositoryResult<()> {
        let user_ids: Vec<UserId> = users.iter().map(|u| u.id).collect();

        let mut tx = self.pool.begin().await?;

        let touched = sqlx::query(
            r#"
            UPDATE teams SET updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

        if touched.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Team",
                id: team_id,
            });
        }

        sqlx::query(
            r#"
            DELETE FROM team_users WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

        // Repeated ids collapse onto their first occurrence
        sqlx::query(
            r#"
            INSERT INTO team_users (team_id, user_id, position)
            SELECT $1, member.user_id, member.position
            FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS member(user_id, position)
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT id, name, about, color, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    async fn find_users(&self, team_id: TeamId) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.name
            FROM team_users tu
            JOIN users u ON u.id = tu.user_id
            WHERE tu.team_id = $1
            ORDER BY tu.position
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn delete(&self, id: TeamId) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM teams WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Team",
                id,
            });
        }

        Ok(())
    }
}
