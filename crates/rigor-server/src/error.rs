use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to API clients as JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Submission {0} not found")]
    SubmissionNotFound(u64),
    #[error("Report for submission {0} is not ready")]
    ReportNotReady(u64),
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::SubmissionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ReportNotReady(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
