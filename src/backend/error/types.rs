/**
 * Backend Error Types
 *
 * This module defines the error type used across the backend. Every failure
 * a handler can surface is a variant of `ApiError`, which carries enough
 * information to produce the HTTP status code and response body.
 *
 * # Error Categories
 *
 * ## Domain rejections
 *
 * Operations reject with a descriptive message and a client error status:
 * - `Validation` - malformed email, invalid role, field constraint
 * - `Forbidden` - a non-admin attempting admin-gated user creation
 * - `EmailTaken` - account creation with an email already in use
 * - `FriendNotFound` - adding a friend by an unknown email
 * - `InvalidCredentials` - login failure (unknown email and wrong password
 *   collapse into the same message to prevent account enumeration)
 *
 * ## Authentication
 *
 * - `NoToken` - protected route called without an authorization header
 * - `InvalidToken` - signature or payload verification failed; the detail
 *   string is included in the response body
 *
 * ## Infrastructure
 *
 * - `Timeout` - a persistence call or hash computation exceeded its bound
 * - `Database`, `Hash`, `Token`, `Serialization`, `Internal` - failures that
 *   are fatal for the request only; reported to clients generically
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error type
///
/// Each variant maps to an HTTP status code via [`ApiError::status_code`]
/// and a response body message via [`ApiError::msg`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field validation failure (malformed email, short username, ...)
    #[error("{message}")]
    Validation {
        /// Human-readable description of the violated constraint
        message: String,
    },

    /// Requesting user lacks the ADMIN role for an admin-gated operation
    #[error("You are not allowed to execute this action")]
    Forbidden,

    /// Account creation with an email that is already registered
    #[error("Email address already in use")]
    EmailTaken,

    /// Friend lookup by email found no user
    #[error("No users found for that email")]
    FriendNotFound,

    /// Login failure; deliberately identical for unknown email and wrong
    /// password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Protected route called without an authorization header
    #[error("No token provided")]
    NoToken,

    /// Token signature or payload verification failed
    #[error("Invalid token")]
    InvalidToken {
        /// Verification failure detail, returned in the `err` field
        detail: String,
    },

    /// A persistence call or hash computation exceeded its time bound
    #[error("Request timed out")]
    Timeout,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token minting error
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// JSON encoding/decoding error on stored records
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other internal error (blocking task failures and the like)
    #[error("internal error: {message}")]
    Internal {
        /// Failure description, logged but not returned to clients
        message: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid-token error from a verification failure
    pub fn invalid_token(detail: impl Into<String>) -> Self {
        Self::InvalidToken {
            detail: detail.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::NoToken | Self::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::FriendNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Database(_)
            | Self::Hash(_)
            | Self::Token(_)
            | Self::Serialization(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message placed in the response body
    ///
    /// Internal failures collapse to a generic message; the underlying cause
    /// is logged at the conversion site instead.
    pub fn msg(&self) -> String {
        match self {
            Self::Database(_)
            | Self::Hash(_)
            | Self::Token(_)
            | Self::Serialization(_)
            | Self::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
