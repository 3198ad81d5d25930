//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently provides:
//!
//! - **`auth`** - Authentication middleware for protected routes

pub mod auth;

pub use auth::{auth_middleware, CurrentUser};
