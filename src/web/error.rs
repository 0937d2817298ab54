use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::store::DirectoryError;

/// Request-scoped failure, rendered as the `{"detail": ...}` JSON body the
/// frontend reads.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let status = match err {
            DirectoryError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            DirectoryError::ActivityNotFound | DirectoryError::NotRegistered => {
                StatusCode::NOT_FOUND
            }
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}
