//! Friend Graph Module
//!
//! Operations on a user's friend list, plus the chat thread that is opened
//! when a new edge is added.
//!
//! Friendship is a directed edge: adding a friend appends the target's id to
//! the requesting user's list only. The target's own list is untouched. The
//! list is stored as an ordered sequence but treated as a set here;
//! duplicates are never inserted.

use sqlx::SqlitePool;

use crate::backend::auth::users::{self, User};
use crate::backend::error::ApiError;

/// Chat thread persistence
pub mod db;

/// HTTP handlers for friend endpoints
pub mod handlers;

/// Add a friend edge from `user` to the account registered under
/// `friend_email`
///
/// Idempotent: if the target is already in the list the user is returned
/// unchanged. On a new edge the list is persisted and a chat thread with the
/// two participants is created as a fire-and-forget side effect; a failure
/// there is logged and does not fail the operation.
///
/// # Errors
/// * `ApiError::FriendNotFound` - no account with that email
pub async fn add_friend(
    pool: &SqlitePool,
    user: &User,
    friend_email: &str,
) -> Result<User, ApiError> {
    let friend = users::get_user_by_email(pool, friend_email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Friend lookup failed for email: {}", friend_email);
            ApiError::FriendNotFound
        })?;

    if user.friends.contains(&friend.id) {
        return Ok(user.clone());
    }

    let mut updated = user.clone();
    updated.friends.push(friend.id);
    users::update_friends(pool, &updated).await?;

    tracing::info!("User {} added friend {}", updated.id, friend.id);

    // The edge is already persisted; the chat thread is best effort.
    if let Err(e) = db::create_chat(pool, &[friend.id, updated.id]).await {
        tracing::warn!("Failed to create chat thread for new friend edge: {}", e);
    }

    Ok(updated)
}

/// Resolve every id in the user's friend list to its record
///
/// Identifiers with no matching record are silently omitted.
pub async fn list_friends(pool: &SqlitePool, user: &User) -> Result<Vec<User>, ApiError> {
    let mut friends = Vec::with_capacity(user.friends.len());
    for id in &user.friends {
        if let Some(friend) = users::get_user_by_id(pool, *id).await? {
            friends.push(friend);
        }
    }
    Ok(friends)
}
