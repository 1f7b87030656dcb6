use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/queries", post(handlers::create_query))
        .route("/api/v1/queries/{id}", get(handlers::get_query))
        .with_state(state)
}
