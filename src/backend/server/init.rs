/**
 * Server Initialization
 *
 * Builds the Axum application from configuration: opens the database,
 * seeds the bootstrap admin account when configured, constructs the token
 * codec and assembles the router.
 */

use axum::Router;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the sqlx error when the database pool cannot be opened.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing chatgraph backend server");

    let pool = connect_database(&config.database_url).await?;

    // Admin-gated creation needs a first admin to exist
    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        if let Err(e) = users::ensure_admin(&pool, email, password).await {
            tracing::error!("Failed to seed admin account: {}", e);
        }
    }

    let state = AppState {
        pool,
        tokens: TokenCodec::new(&config.secret_key),
    };

    Ok(create_router(state))
}
