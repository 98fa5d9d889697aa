use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::team::{Team, TeamId};
use crate::domain::user::{User, UserId};

/// Team with its current members
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub id: TeamId,
    pub name: String,
    pub about: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub members: Vec<MemberResponse>,
}

/// A member as shown on a team
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
}

impl From<User> for MemberResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

impl TeamDetailResponse {
    fn new(team: Team, members: Vec<User>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            about: team.about,
            color: team.color,
            created_at: team.created_at,
            updated_at: team.updated_at,
            members: members.into_iter().map(MemberResponse::from).collect(),
        }
    }
}

/// Create a new team and attach its initial members
///
/// POST /api/teams
///
/// The body is taken as raw bytes; decoding and validation are part of
/// provisioning. Member ids that do not resolve are dropped silently.
pub async fn create_team(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let team = state.provisioner.provision(&body).await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Get a team and its members by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
) -> Result<Json<TeamDetailResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    let members = state
        .teams
        .find_users(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(TeamDetailResponse::new(team, members)))
}
