/**
 * Get Current User Handler
 *
 * GET /api/user returns the authenticated user attached by the auth
 * middleware, or JSON `null` when the token was valid but no matching user
 * exists.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserView;
use crate::backend::middleware::auth::CurrentUser;

/// Get current user handler
pub async fn get_user(CurrentUser(user): CurrentUser) -> Json<Option<UserView>> {
    Json(user.as_ref().map(UserView::from))
}
