/**
 * Authentication Middleware
 *
 * This module protects routes that require authentication. For every
 * request it extracts the bearer token from the `authorization` header,
 * verifies it through the session token codec, resolves the corresponding
 * user, and attaches the result to the request before the handler runs.
 *
 * # Per-request Flow
 *
 * 1. No `authorization` header: 401 `{"msg":"No token provided"}`
 * 2. Verification failure: 401 `{"msg":"Invalid token","err":...}`
 * 3. Valid token: the user is looked up by the embedded id and attached as
 *    `CurrentUser`. A lookup miss attaches `CurrentUser(None)` rather than
 *    rejecting; handlers that need a user reject on their own.
 *
 * The header value may be the bare token or prefixed with `Bearer `.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// The authenticated user attached to a request
///
/// `None` means the token was valid but no matching user exists.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    /// Unwrap the attached user, rejecting the request when there is none
    pub fn require(self) -> Result<User, ApiError> {
        self.0.ok_or_else(|| {
            tracing::warn!("Request authenticated but no matching user exists");
            ApiError::invalid_token("no matching user for token")
        })
    }
}

/// Authentication middleware
///
/// Applied as a route layer to every protected route. On success the
/// resolved user is placed into the request extensions; on failure the
/// request terminates with a 401 and no downstream handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing authorization header");
            ApiError::NoToken
        })?;

    // Accept both the bare token and the Bearer form
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let user_id = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed");
        e
    })?;

    let user = get_user_by_id(&state.pool, user_id).await?;
    if user.is_none() {
        tracing::warn!("No user found for valid token: {}", user_id);
    }

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser missing from request extensions");
            ApiError::NoToken
        })
    }
}
