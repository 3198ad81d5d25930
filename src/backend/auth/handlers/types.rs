/**
 * Authentication Handler Types
 *
 * Request and response types shared by the authentication and user
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email the account is registered under
    pub email: String,
    /// Raw password, verified against the stored hash
    pub password: String,
}

/// Login response: a signed session token
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// User creation request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    pub email: String,
    /// Raw password (hashed before storage)
    pub password: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// User view returned to clients
///
/// Carries everything a client may see; never the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    /// Friend user ids
    pub friends: Vec<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            friends: user.friends.iter().map(|id| id.to_string()).collect(),
        }
    }
}
