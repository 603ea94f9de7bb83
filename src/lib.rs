// src/lib.rs
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assembles the full application router. Shared with the integration tests
/// so they exercise the same routing, layers, and state wiring as `main`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_router())
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
