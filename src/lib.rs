// Increase recursion limit for complex async operations
#![recursion_limit = "256"]

//! Chatgraph - Main Library
//!
//! Chatgraph is a small social chat backend built with Rust: user accounts
//! with role-based administration, stateless token authentication, and a
//! friend graph that opens a chat thread whenever an edge is added.
//!
//! # Overview
//!
//! This library provides the core functionality for Chatgraph, including:
//! - Axum HTTP server with a token-protected API surface
//! - User directory with admin-gated account creation
//! - bcrypt credential hashing and JWT session tokens
//! - Friend graph operations backed by SQLite via sqlx
//!
//! # Module Structure
//!
//! - **`backend`** - All server-side code
//!   - Authentication (hashing, tokens, login)
//!   - User directory and friend graph
//!   - Middleware, routing, configuration and state
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatgraph::backend::server::config::AppConfig;
//! use chatgraph::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = AppConfig::from_env();
//! let app = create_app(&config).await?;
//! // Use app with an Axum server
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
