//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication and user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Login and logout handlers
//! ├── me.rs       - Get current user handler
//! └── create.rs   - Admin-gated user creation handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /auth/login - credential check, token minting
//! - **`logout`** - POST /auth/logout - stateless no-op
//! - **`get_user`** - GET /api/user - the authenticated user, or null
//! - **`create_user`** - POST /api/user - admin-gated account creation

/// Request and response types
pub mod types;

/// Login and logout handlers
pub mod login;

/// Get current user handler
pub mod me;

/// User creation handler
pub mod create;

// Re-export commonly used types
pub use types::{CreateUserRequest, LoginRequest, TokenResponse, UserView};

// Re-export handlers
pub use create::create_user;
pub use login::{login, logout};
pub use me::get_user;
