pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::extraction::handlers::{handle_upload_pdf, MAX_UPLOAD_BYTES};
use crate::optimizer::handlers::handle_optimize;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Extractor
        .route("/api/upload-pdf", post(handle_upload_pdf))
        .route("/api/upload-pdf/", post(handle_upload_pdf))
        // Optimizer
        .route("/api/optimize", post(handle_optimize))
        .route("/api/optimize/", post(handle_optimize))
        // Oversized uploads must reach the handler so it can answer with its own 400.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES * 2))
        .fallback_service(static_files)
        .with_state(state)
}
