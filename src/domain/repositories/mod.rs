// Repository ports
// Infrastructure adapters implement these traits

pub mod team_repository;
pub mod user_repository;

pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Errors reported by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
