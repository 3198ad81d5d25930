/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone and safe to share: the pool is internally
 * reference counted, and the token codec only holds immutable keys.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenCodec;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `pool` - SQLite connection pool, the sole point of persistence
/// * `tokens` - session token codec, built from the configured secret
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Session token codec
    pub tokens: TokenCodec,
}

/// Allow handlers to extract the pool directly from `AppState`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract the token codec directly from `AppState`
impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
