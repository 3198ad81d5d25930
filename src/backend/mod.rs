//! Backend Module
//!
//! This module contains all server-side code for the Chatgraph application.
//! It provides an Axum HTTP server exposing a login route and a
//! token-protected user/friend API on top of a SQLite document store.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential hashing, session tokens, user directory, login
//! - **`friends`** - Friend graph operations and chat thread creation
//! - **`middleware`** - Request authentication middleware
//! - **`db`** - Persistence call helpers (timeouts, retry)
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and user directory
//! ├── friends/        - Friend graph
//! ├── middleware/     - Request middleware
//! ├── db.rs           - Persistence helpers
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `POST /auth/login` verifies credentials and mints a session token
//! 2. Every `/api` request passes through the auth middleware, which
//!    verifies the token and attaches the resolved user to the request
//! 3. Handlers translate the call into user directory / friend graph
//!    operations and serialize the result

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Friend graph and chat threads
pub mod friends;

/// Middleware for request processing
pub mod middleware;

/// Persistence call helpers
pub mod db;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
