use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("catalog unavailable")]
    CatalogUnavailable,
    #[error("catalog malformed")]
    CatalogMalformed,
    #[error("invalid path")]
    InvalidPath,
    #[error("not found")]
    NotFound,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::CatalogMalformed | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidPath => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
