use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use super::members::resolve_members;
use super::request::{CreateTeamRequest, ValidatedRequest, ValidationError};
use super::team::{Team, TeamId};
use crate::domain::repositories::{RepositoryError, TeamRepository, UserRepository};

/// What to do with a freshly created team when its members cannot be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipFailurePolicy {
    /// Delete the team again before reporting the failure
    #[default]
    Rollback,
    /// Leave the team in place without members
    Keep,
}

impl FromStr for MembershipFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rollback" => Ok(Self::Rollback),
            "keep" => Ok(Self::Keep),
            other => Err(format!(
                "Unknown membership failure policy: {} (expected rollback or keep)",
                other
            )),
        }
    }
}

impl fmt::Display for MembershipFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rollback => write!(f, "rollback"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

/// Terminal failures of team provisioning
///
/// Member lookups never fail a request, so they have no variant here.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid team: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to create team: {0}")]
    TeamCreate(#[source] RepositoryError),

    #[error("Failed to update members of team {team_id}: {source}")]
    MembershipUpdate {
        team_id: TeamId,
        /// Whether the team was deleted again afterwards
        rolled_back: bool,
        #[source]
        source: RepositoryError,
    },
}

impl ProvisionError {
    /// True for failures caused by the request itself rather than storage
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Validation(_))
    }
}

/// Turns a team creation payload into a persisted team with members
///
/// Stateless apart from its store handles; one instance is shared by every
/// request.
///
/// # Steps
/// 1. Decode the payload
/// 2. Validate name, about and color
/// 3. Create the team
/// 4. Resolve member ids, skipping any that cannot be found
/// 5. Replace the team's members with the resolved users (always called,
///    even with no members)
pub struct TeamProvisioner {
    teams: Arc<dyn TeamRepository>,
    users: Arc<dyn UserRepository>,
    on_membership_failure: MembershipFailurePolicy,
}

impl TeamProvisioner {
    /// Creates a provisioner with the default [`MembershipFailurePolicy`]
    pub fn new(teams: Arc<dyn TeamRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            teams,
            users,
            on_membership_failure: MembershipFailurePolicy::default(),
        }
    }

    pub fn with_membership_failure_policy(mut self, policy: MembershipFailurePolicy) -> Self {
        self.on_membership_failure = policy;
        self
    }

    pub fn membership_failure_policy(&self) -> MembershipFailurePolicy {
        self.on_membership_failure
    }

    /// Runs the workflow for one raw JSON payload
    ///
    /// # Returns
    /// * `Ok(Team)` - The created team with its assigned id
    /// * `Err(ProvisionError)` - The first terminal failure; nothing touches
    ///   the stores before decoding and validation succeed
    pub async fn provision(&self, payload: &[u8]) -> Result<Team, ProvisionError> {
        let ValidatedRequest { team, members } = CreateTeamRequest::decode(payload)?.validate()?;

        let team = self.teams.create(team).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create team");
            ProvisionError::TeamCreate(e)
        })?;

        let users = self.users.as_ref();
        let resolved = resolve_members(&members, move |id| users.find_by_id(id)).await;

        if let Err(source) = self.teams.update_users(team.id, &resolved).await {
            tracing::error!(team_id = team.id, error = %source, "Failed to update team members");
            let rolled_back = self.handle_membership_failure(team.id).await;
            return Err(ProvisionError::MembershipUpdate {
                team_id: team.id,
                rolled_back,
                source,
            });
        }

        tracing::info!(
            team_id = team.id,
            name = %team.name,
            members = resolved.len(),
            "Team created"
        );

        Ok(team)
    }

    /// Applies the configured policy; returns whether the team was removed
    async fn handle_membership_failure(&self, team_id: TeamId) -> bool {
        match self.on_membership_failure {
            MembershipFailurePolicy::Keep => {
                tracing::warn!(team_id, "Team kept without members");
                false
            }
            MembershipFailurePolicy::Rollback => match self.teams.delete(team_id).await {
                Ok(()) => {
                    tracing::warn!(team_id, "Team rolled back after membership failure");
                    true
                }
                Err(e) => {
                    tracing::error!(team_id, error = %e, "Failed to roll back team");
                    false
                }
            },
        }
    }
}
