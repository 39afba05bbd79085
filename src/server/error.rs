use crate::model::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            warn!("Request failed [{}]: {}", status, message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
