//! API error types and handling.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use dopant::DopantError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Error from the dopant library.
    Dopant(DopantError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Dopant(e) => {
                let status = status_for(&e);
                if status.is_server_error() {
                    error!("Request failed: {}", e);
                }
                (status, e.kind(), e.to_string())
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

fn status_for(err: &DopantError) -> StatusCode {
    match err {
        DopantError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DopantError::InvalidSpecies { .. } | DopantError::NotFound { .. } => StatusCode::NOT_FOUND,
        DopantError::Store(_) | DopantError::MalformedDocument { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DopantError> for ApiError {
    fn from(err: DopantError) -> Self {
        ApiError::Dopant(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Dopant(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DopantError::InvalidInput("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DopantError::InvalidSpecies {
                species: "XAl".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DopantError::Store("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::from(DopantError::NotFound {
            collection: "c".into(),
            field: "f".into(),
            value: "v".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(DopantError::Store("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::BadRequest("no element".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
