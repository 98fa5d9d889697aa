use chrono::{DateTime, Utc};
use serde::Serialize;

use super::request::ValidationError;

/// Identifier assigned to a team by the team store
pub type TeamId = i64;

/// A team that has passed validation but has not been persisted yet
///
/// Has no id; the team store assigns one on create and hands back a [`Team`].
///
/// # Invariants
/// - Name, about and color are non-empty
///
/// # Example
/// ```
/// use roster_api::domain::team::NewTeam;
///
/// let team = NewTeam::new("Core", "Core team", "#ff0000").expect("valid team");
/// assert_eq!(team.name(), "Core");
///
/// assert!(NewTeam::new("", "Core team", "#ff0000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    name: String,
    about: String,
    color: String,
}

impl NewTeam {
    /// Creates a new unpersisted team
    ///
    /// # Returns
    /// * `Ok(NewTeam)` - If every required field is non-empty
    /// * `Err(ValidationError)` - Listing each empty field, in declaration order
    pub fn new(
        name: impl Into<String>,
        about: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let about = about.into();
        let color = color.into();

        let missing: Vec<&'static str> = [("name", &name), ("about", &about), ("color", &color)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::new(missing));
        }

        Ok(Self { name, about, color })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Attaches the store-assigned identity, producing the persisted team
    ///
    /// Only to be used by repository implementations once the row exists.
    pub fn into_persisted(self, id: TeamId, created_at: DateTime<Utc>) -> Team {
        Team {
            id,
            name: self.name,
            about: self.about,
            color: self.color,
            created_at,
            updated_at: created_at,
        }
    }
}

/// A persisted team
///
/// Serialized as-is in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub about: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
