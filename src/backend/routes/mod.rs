//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Protected API endpoints
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `POST /auth/login` - credential check, token minting
//! - `POST /auth/logout` - stateless no-op
//!
//! ## Protected (auth middleware applied)
//!
//! - `GET /api/user` - the authenticated user
//! - `POST /api/user` - admin-gated user creation
//! - `GET /api/friends` - resolved friend list
//! - `POST /api/friends` - add a friend by email

/// Main router creation
pub mod router;

/// Protected API endpoints
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
