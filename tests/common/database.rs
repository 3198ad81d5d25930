//! Database test fixtures
//!
//! Provides an in-memory SQLite database with migrations applied, so the
//! whole suite runs without external services.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test database fixture
///
/// A single connection keeps every query in the test on the same in-memory
/// database.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
