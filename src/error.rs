use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Non-integer or non-positive `page`/`limit`. Rejected outright;
    /// pagination is strict where filters are permissive.
    #[error("Invalid 'page' or 'limit'.")]
    InvalidPagination,

    /// Storage failure, propagated unchanged from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("unreadable source file: {0}")]
    Source(#[from] std::io::Error),

    #[error("source is not valid JSON: {0}")]
    SourceFormat(#[from] serde_json::Error),

    #[error("source must be a JSON array or object of recipes")]
    SourceShape,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidPagination => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
