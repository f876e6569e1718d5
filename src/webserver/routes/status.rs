use axum::response::Response;
use chrono::Utc;
use serde::Serialize;

use crate::webserver::utils::success_response;

/// Simple health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /health
pub async fn health_check() -> Response {
    success_response(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
