/**
 * API Route Configuration
 *
 * Defines the token-protected API routes. Every route added here passes
 * through the authentication middleware before reaching its handler.
 *
 * # Routes
 *
 * - `GET /api/user` - Get the authenticated user
 * - `POST /api/user` - Create a user (requesting user must be an admin)
 * - `GET /api/friends` - Get the authenticated user's friends
 * - `POST /api/friends` - Add a friend by email
 */

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::backend::auth::handlers::{create_user, get_user};
use crate::backend::friends::handlers::{add_friend, get_friends};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the protected API routes to the router
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed by the auth middleware
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/user", get(get_user).post(create_user))
        .route("/api/friends", get(get_friends).post(add_friend))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router.merge(protected)
}
