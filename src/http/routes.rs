use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Individual pipeline stages
        .route("/transcribe", post(handlers::transcribe))
        .route("/simplify_text", post(handlers::simplify_text))
        .route("/translate_signs", post(handlers::translate_signs))
        .route("/generate_pose", post(handlers::generate_pose))
        // End-to-end pipeline
        .route("/pipeline/run", post(handlers::run_pipeline))
        // Permissive CORS so the demo frontend can call from anywhere
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
