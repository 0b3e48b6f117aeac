//! HTTP error mapping for the endpoints that report failures as JSON.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use skycast_core::TranslateError;

#[derive(Debug)]
pub enum HttpError {
    /// The feature is not configured or its provider is unreachable.
    Unavailable(String),
    /// The upstream provider rejected the request.
    Upstream(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = ErrorBody { error: message, status: status.as_u16() };
        (status, axum::Json(body)).into_response()
    }
}

impl From<TranslateError> for HttpError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Transport(_) => HttpError::Unavailable(err.to_string()),
            TranslateError::Status { .. } | TranslateError::Malformed(_) => {
                HttpError::Upstream(err.to_string())
            }
        }
    }
}
