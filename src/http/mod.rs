// LogLens - http/mod.rs
//
// The thin request layer: route table and error mapping around the
// analytics service. All analytic behaviour lives in app and core; this
// layer only extracts inputs, maps errors to statuses, and shapes JSON.

pub mod error;
pub mod handlers;

use crate::app::service::LogService;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router(service: Arc<LogService>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/logs/upload", post(handlers::upload))
        .route("/api/logs/analysis/summary", get(handlers::summary))
        .route("/api/logs/analysis/top-messages", get(handlers::top_messages))
        .route("/api/logs/search", get(handlers::search))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
