use axum::{http::StatusCode, response::Json};
use tracing::{debug, info};

use crate::config::{MAX_FILE_SIZE_BYTES, SUPPORTED_EXTENSIONS};
use crate::models::HealthResponse;

/// Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_formats: SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        max_file_size_bytes: MAX_FILE_SIZE_BYTES,
    };

    info!(status = %response.status, "Health check completed");

    Json(response)
}

/// Readiness check endpoint. Extraction has no external dependencies, so a
/// running process is ready.
pub async fn ready_handler() -> StatusCode {
    debug!("Readiness check passed");
    StatusCode::OK
}
