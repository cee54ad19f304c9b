use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Authentication failure for an inbound request.
///
/// The `Display` text doubles as the HTTP status text sent to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized - Invalid MCP token")]
    InvalidAccessSecret,

    #[error("Unauthorized - Missing Todoist API token")]
    MissingCredential,
}

impl AuthError {
    /// HTTP status for this failure. Always 401.
    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    /// Stable machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidAccessSecret => "invalid_mcp_token",
            AuthError::MissingCredential => "missing_api_token",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}
