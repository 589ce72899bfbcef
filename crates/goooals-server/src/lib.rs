//! goooals-server library root.
//!
//! Exposes the router and its building blocks so integration tests can
//! drive the API in-process without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/getRandomStandardGoal",
            get(routes::standard::get_random_standard_goal),
        )
        .route(
            "/api/getRandomExternalGoal",
            get(routes::external::get_random_external_goal),
        )
        .route("/api/sendEmail", post(routes::email::send_email))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
