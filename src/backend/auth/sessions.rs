/**
 * Session Token Codec
 *
 * Mints and verifies the signed, stateless bearer tokens that carry a user
 * identifier between requests. The codec is constructed once from the
 * configured secret and shared through the application state; signature
 * verification is the single source of trust for the embedded identifier.
 *
 * Tokens expire after 30 days. There is no server-side session store and no
 * revocation list.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::backend::error::ApiError;

/// Token lifetime in seconds (30 days)
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Session token codec
///
/// Holds the HMAC keys derived from the configured secret. Cheap to clone;
/// one instance lives in the application state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Build a codec from the process-wide secret key
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            validation: Validation::default(),
        }
    }

    /// Mint a signed token for a user
    ///
    /// # Errors
    /// * `ApiError::Token` - signing failed (fatal for the request)
    pub fn mint(&self, user_id: Uuid) -> Result<String, ApiError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ApiError::internal("system clock before Unix epoch"))?
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return the embedded user ID
    ///
    /// # Errors
    /// * `ApiError::InvalidToken` - the signature does not match the secret,
    ///   the payload is malformed, or the token is expired
    pub fn verify(&self, token: &str) -> Result<Uuid, ApiError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| ApiError::invalid_token(e.to_string()))?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| ApiError::invalid_token("malformed user id in token"))
    }
}
