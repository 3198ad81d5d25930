/**
 * Login and Logout Handlers
 *
 * POST /auth/login verifies credentials and returns a signed session token.
 *
 * # Security Notes
 *
 * - Unknown email and wrong password return the same 400 body
 *   (`{"msg":"Invalid credentials"}`) to prevent account enumeration
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::get_credentials_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
/// * `400 Bad Request` - unknown email or wrong password (same body)
/// * `500 Internal Server Error` - database, hash or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let credentials = get_credentials_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify_password(&request.password, &credentials.password_hash).await?;
    if !valid {
        tracing::warn!("Invalid password for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.mint(credentials.user_id)?;

    tracing::info!("User logged in: {}", credentials.email);

    Ok(Json(TokenResponse { token }))
}

/// Logout handler
///
/// Tokens are stateless and carry no server-side session, so there is
/// nothing to revoke; the client simply discards its token.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
