/// JSON response helpers shared by all route handlers
use crate::errors::ProxyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// 200 with a JSON body
pub fn success_response<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Error JSON body `{"error": <message>}` with the status for this error class
pub fn error_response(err: &ProxyError) -> Response {
    let status = match err {
        ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ProxyError::FixtureNotFound => StatusCode::NOT_FOUND,
        // Upstream 4xx and 5xx are not distinguished: either way this
        // gateway failed to produce the data
        ProxyError::UpstreamStatus(_) | ProxyError::UpstreamTransport(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
