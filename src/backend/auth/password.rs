/**
 * Credential Hashing
 *
 * One-way hashing and verification of raw passwords using bcrypt with the
 * default cost factor (12). Hashing is CPU-bound, so both operations run on
 * the blocking thread pool and are wrapped in a bounded timeout to keep a
 * slow hash from stalling the request workers.
 */

use std::time::Duration;

use bcrypt::DEFAULT_COST;

use crate::backend::error::ApiError;

/// Upper bound on a single hash or verify computation
pub const HASH_TIMEOUT: Duration = Duration::from_secs(10);

/// Hash a raw password
///
/// # Arguments
/// * `raw` - The raw password
///
/// # Errors
/// * `ApiError::Timeout` - the computation exceeded [`HASH_TIMEOUT`]
/// * `ApiError::Hash` - bcrypt failed internally
pub async fn hash_password(raw: &str) -> Result<String, ApiError> {
    let raw = raw.to_string();
    let task = tokio::task::spawn_blocking(move || bcrypt::hash(raw, DEFAULT_COST));

    match tokio::time::timeout(HASH_TIMEOUT, task).await {
        Ok(joined) => {
            let hashed = joined.map_err(|e| ApiError::internal(format!("hash task failed: {e}")))??;
            Ok(hashed)
        }
        Err(_) => Err(ApiError::Timeout),
    }
}

/// Verify a raw password against a stored hash
///
/// A wrong password returns `Ok(false)`; only a malformed stored hash or an
/// internal bcrypt failure is an error.
///
/// # Arguments
/// * `raw` - The raw password to check
/// * `hash` - The stored bcrypt hash
pub async fn verify_password(raw: &str, hash: &str) -> Result<bool, ApiError> {
    let raw = raw.to_string();
    let hash = hash.to_string();
    let task = tokio::task::spawn_blocking(move || bcrypt::verify(raw, &hash));

    match tokio::time::timeout(HASH_TIMEOUT, task).await {
        Ok(joined) => {
            let valid = joined.map_err(|e| ApiError::internal(format!("verify task failed: {e}")))??;
            Ok(valid)
        }
        Err(_) => Err(ApiError::Timeout),
    }
}
