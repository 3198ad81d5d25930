/**
 * User Creation Handler
 *
 * POST /api/user creates a new account through the user directory. The
 * operation is gated on the REQUESTING user holding the ADMIN role; the
 * created account always starts as a plain member.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{CreateUserRequest, UserView};
use crate::backend::auth::users::{self, NewUser};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::server::state::AppState;

/// Create user handler
///
/// # Errors
/// * `401 Unauthorized` - token valid but no matching user
/// * `403 Forbidden` - requesting user is not an admin
/// * `400 Bad Request` - field validation failure
/// * `409 Conflict` - email already registered
pub async fn create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let requesting = current.require()?;

    tracing::info!(
        "Create user request for {} by {}",
        request.email,
        requesting.email
    );

    let created = users::create_user(
        &state.pool,
        NewUser {
            email: request.email,
            password: request.password,
            username: request.username,
        },
        &requesting,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&created))))
}
