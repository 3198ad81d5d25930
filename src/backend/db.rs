/**
 * Persistence Call Helpers
 *
 * Every database round trip in the backend goes through [`call`], which
 * bounds the call with a timeout and retries a timed-out call exactly once.
 * A second timeout surfaces as [`ApiError::Timeout`]; all other database
 * errors pass through unchanged and are not retried.
 */

use std::future::Future;
use std::time::Duration;

use crate::backend::error::ApiError;

/// Upper bound on a single persistence round trip
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a database operation with a bounded timeout, retrying once on timeout
///
/// The closure is invoked to build a fresh future for each attempt.
///
/// # Arguments
/// * `op` - Closure producing the database future
///
/// # Errors
/// * `ApiError::Timeout` - both attempts exceeded [`QUERY_TIMEOUT`]
/// * `ApiError::Database` - the query itself failed
pub async fn call<T, F, Fut>(op: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, op()).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            tracing::warn!("database call timed out, retrying once");
            match tokio::time::timeout(QUERY_TIMEOUT, op()).await {
                Ok(result) => Ok(result?),
                Err(_) => Err(ApiError::Timeout),
            }
        }
    }
}
