/**
 * Server Configuration
 *
 * Loads configuration from the environment once at startup. Nothing else in
 * the backend reads process state: the secret key goes into the token codec
 * at construction, and the database URL is only used to open the pool.
 */

use sqlx::SqlitePool;

/// Process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
    /// Secret key for signing session tokens
    pub secret_key: String,
    /// Port the server listens on
    pub port: u16,
    /// Email of the bootstrap admin account, seeded at startup
    pub admin_email: Option<String>,
    /// Password of the bootstrap admin account
    pub admin_password: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// `DATABASE_URL` and `SERVER_PORT` have development defaults.
    /// A missing `SECRET_KEY` is logged and replaced with a placeholder so
    /// a development server still starts.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:chatgraph.db?mode=rwc".to_string());

        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, using development fallback");
            "dev-secret-change-in-production".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            secret_key,
            port,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }
}

/// Open the database pool and run migrations
///
/// A migration failure is logged but does not prevent startup; the schema
/// may already be up to date.
///
/// # Errors
///
/// Returns the sqlx error when the pool cannot be opened at all.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed"),
        Err(e) => tracing::error!("Failed to run database migrations: {:?}", e),
    }

    Ok(pool)
}
