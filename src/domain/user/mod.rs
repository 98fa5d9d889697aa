// User domain module
// Users are owned by the user store; teams only need identity and existence

use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the user store
pub type UserId = i64;

/// A user that can be attached to a team
///
/// Profile fields beyond `id` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
}
