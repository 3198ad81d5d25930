//! Authentication Module
//!
//! This module handles credential hashing, session tokens, the user
//! directory, and the login endpoint.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - session token minting and verification
//! - **`users`** - user model and directory operations
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Credential hashing
//! ├── sessions.rs     - Session token codec
//! ├── users.rs        - User model and directory operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Login and logout handlers
//!     ├── me.rs       - Get current user handler
//!     └── create.rs   - Admin-gated user creation handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email and password are verified, a signed token is returned
//! 2. **Protected request**: the middleware verifies the token and resolves
//!    the user before the handler runs
//! 3. **Creation**: new accounts are created only through the directory,
//!    gated on the requesting user holding the ADMIN role
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned by
//!   directory reads
//! - Tokens are stateless and signed with a process-wide secret supplied at
//!   construction time
//! - Login failures use one generic message for unknown email and wrong
//!   password

/// Credential hashing
pub mod password;

/// Session token codec
pub mod sessions;

/// User model and directory operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use sessions::TokenCodec;
pub use users::{Role, User};
pub use handlers::{create_user, get_user, login, logout};
