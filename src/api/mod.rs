pub mod health;
pub mod rsvp;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .with_state(state)
}

/// Router plus the HTTP layers the server runs with (CORS, tracing)
pub fn create_app(state: AppState) -> Router {
    create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<AppState> {
    rsvp::rsvp_routes()
}
