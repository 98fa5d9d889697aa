// Team domain module
// Contains the team entity, the creation request and the provisioning workflow

#![allow(clippy::module_inception)]

pub mod members;
pub mod provisioning;
pub mod request;
pub mod team;

// Re-export main types for convenience
pub use members::{resolve_members, MemberId};
pub use provisioning::{MembershipFailurePolicy, ProvisionError, TeamProvisioner};
pub use request::{CreateTeamRequest, ValidatedRequest, ValidationError};
pub use team::{NewTeam, Team, TeamId};
