use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, uploads};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Upload form static files path (configurable via env)
    let static_dir =
        std::env::var("SORTBOX_STATIC_DIR").unwrap_or_else(|_| "crates/server/static".to_string());

    let max_body = state.config().storage.max_upload_bytes;

    // API routes
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .with_state(state.clone());

    // Serve the upload form page at / with index fallback
    let index_path = format!("{}/index.html", static_dir);
    let serve_dir = ServeDir::new(&static_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .route("/upload", post(uploads::upload))
        .with_state(state)
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
}
