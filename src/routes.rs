use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route(
            "/api/health",
            get(handlers::health_check).fallback(handlers::api_not_found),
        )

        // Translation
        .route(
            "/api/translate",
            post(handlers::translate).fallback(handlers::api_not_found),
        )

        // Static frontend, with `api/` paths kept out of it
        .fallback(handlers::static_proxy)
}

/// Full application with middleware and state attached
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
