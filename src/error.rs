//! Error types for the HRMS service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures raised by a store adapter. The `Display` text is what clients see
/// in a 500 body.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("inserted _id is not an ObjectId: {0}")]
    MissingInsertedId(String),

    /// Failure of a store that is not MongoDB-backed, such as a test double
    /// standing in for an unreachable database.
    #[error("{0}")]
    Unavailable(String),
}

/// HTTP outcome of a failed request. Bodies are plain text, empty when there
/// is nothing to report.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request() -> Self {
        ApiError::BadRequest(String::new())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::BadRequest(body) | ApiError::Internal(body) => (status, body).into_response(),
            ApiError::NotFound => status.into_response(),
        }
    }
}
