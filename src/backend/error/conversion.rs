/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * { "msg": "Invalid credentials" }
 * ```
 *
 * Invalid-token responses additionally carry the verification detail:
 * ```json
 * { "msg": "Invalid token", "err": "ExpiredSignature" }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert a backend error into an HTTP response
    ///
    /// The status code comes from [`ApiError::status_code`] and the body
    /// carries [`ApiError::msg`]. Server-side failures are logged with their
    /// full detail before being collapsed to a generic body.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        let body = match &self {
            ApiError::InvalidToken { detail } => serde_json::json!({
                "msg": self.msg(),
                "err": detail,
            }),
            _ => serde_json::json!({ "msg": self.msg() }),
        };

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
