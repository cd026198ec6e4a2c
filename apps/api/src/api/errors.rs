use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::TeamGenerationError;

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

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
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

impl From<TeamGenerationError> for ApiError {
    fn from(error: TeamGenerationError) -> Self {
        match error {
            TeamGenerationError::NotFound(message) => Self::not_found(message),
            TeamGenerationError::Forbidden(message) => Self::forbidden(message),
            TeamGenerationError::InsufficientPlayers(message) => Self::bad_request(message),
            TeamGenerationError::Persistence(message) => Self::internal_server_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_errors_map_to_status_codes() {
        let cases = [
            (TeamGenerationError::game_not_found(), StatusCode::NOT_FOUND),
            (TeamGenerationError::not_host(), StatusCode::FORBIDDEN),
            (TeamGenerationError::too_few_players(), StatusCode::BAD_REQUEST),
            (TeamGenerationError::persistence("db down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            let message = error.to_string();
            let api_error = ApiError::from(error);
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.message, message);
        }
    }
}
