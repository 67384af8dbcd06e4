//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/api/info", get(routes::api_info))
        .route("/load-test", get(routes::load_test))
        .with_state(state)
}
