/**
 * Friend Endpoint Handlers
 *
 * HTTP adapters over the friend graph operations:
 *
 * - GET /api/friends - resolve the authenticated user's friend list
 * - POST /api/friends - add a friend by email
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::auth::handlers::types::UserView;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::server::state::AppState;

/// Add friend request
#[derive(Deserialize, Serialize, Debug)]
pub struct AddFriendRequest {
    /// Email of the user to add
    pub email: String,
}

/// Get friends handler
///
/// Returns the resolved friend records of the authenticated user.
pub async fn get_friends(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let user = current.require()?;

    let friends = super::list_friends(&state.pool, &user).await?;
    Ok(Json(friends.iter().map(UserView::from).collect()))
}

/// Add friend handler
///
/// Appends the target to the authenticated user's friend list and returns
/// the updated user.
pub async fn add_friend(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<AddFriendRequest>,
) -> Result<Json<UserView>, ApiError> {
    let user = current.require()?;

    tracing::info!("User {} adding friend by email", user.id);

    let updated = super::add_friend(&state.pool, &user, &request.email).await?;
    Ok(Json(UserView::from(&updated)))
}
