/**
 * Router Configuration
 *
 * Assembles the complete Axum router: public authentication routes, the
 * token-protected API routes, request tracing, CORS, and a 404 fallback.
 */

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::{login, logout};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (pool and token codec)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    // Protected API routes behind the auth middleware
    let router = configure_api_routes(router, &state);

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
