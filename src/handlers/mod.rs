pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{MAX_FILE_SIZE_BYTES, MULTIPART_OVERHEAD_BYTES};
use crate::middleware::logging_middleware;

/// Builds the service router with its middleware stack.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/upload", post(upload_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_FILE_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES))
                .layer(axum::middleware::from_fn(logging_middleware)),
        )
}
