pub mod health;
pub mod hello;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

/// Builds the full application: `/api/v1` routes wrapped in tracing and CORS.
/// Layers wrap the 404 fallback too, so unmatched paths still get CORS headers.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/hello", get(hello::hello_handler));

    Router::new()
        .nest(API_PREFIX, api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors_middleware)),
        )
}
