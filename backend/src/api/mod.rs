//! API module
//!
//! Contains HTTP request handlers and the router that wires them together

pub mod chat;
pub mod health;
pub mod middleware;

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with all routes and middleware
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Health check and hello world
        .route("/", get(health::hello_world))
        .route("/api/health", get(health::health_check))
        // Chat endpoint
        .route("/api/chat", post(chat::chat))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(state)
}
