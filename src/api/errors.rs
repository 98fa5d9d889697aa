use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::team::ProvisionError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// Request problems map to 400, storage failures to 500
impl From<ProvisionError> for ApiError {
    fn from(err: ProvisionError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal_server_error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::RepositoryError;
    use crate::domain::team::CreateTeamRequest;

    #[test]
    fn decode_error_is_bad_request() {
        let err = CreateTeamRequest::decode(b"nope").unwrap_err();

        let api: ApiError = ProvisionError::from(err).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert!(api.message.starts_with("Invalid request body"));
    }

    #[test]
    fn validation_error_is_bad_request() {
        let err = CreateTeamRequest::default().validate().unwrap_err();

        let api: ApiError = ProvisionError::from(err).into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api.message,
            "Invalid team: missing required fields: name, about, color"
        );
    }

    #[test]
    fn store_errors_are_internal() {
        let create = ProvisionError::TeamCreate(RepositoryError::Unavailable("down".into()));
        let update = ProvisionError::MembershipUpdate {
            team_id: 3,
            rolled_back: true,
            source: RepositoryError::Unavailable("down".into()),
        };

        let create: ApiError = create.into();
        let update: ApiError = update.into();
        assert_eq!(create.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(create.message, "Failed to create team: Storage unavailable: down");
        assert_eq!(update.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            update.message,
            "Failed to update members of team 3: Storage unavailable: down"
        );
    }
}
