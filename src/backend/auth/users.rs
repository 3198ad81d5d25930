/**
 * User Model and Directory Operations
 *
 * This module owns the user record and every operation that reads or writes
 * it. Users are plain data; all behavior lives in the free functions below.
 *
 * # Record Shape
 *
 * `roles` and `friends` are stored as JSON-encoded arrays in the users
 * table. Role values are validated against the [`Role`] enumeration when a
 * row is decoded. The password hash is not part of [`User`] at all: reads
 * never return it, and login goes through [`get_credentials_by_email`],
 * the one projection that includes it.
 *
 * # Uniqueness
 *
 * Creation performs a count-by-email check before inserting. That check and
 * the insert are two separate round trips, so two concurrent requests for
 * the same email can both pass it; the unique index on `users.email` is the
 * authoritative guard, and a violation there is reported as `EmailTaken`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::password;
use crate::backend::db;
use crate::backend::error::ApiError;

/// Roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular member
    Member,
    /// Administrator; may create new users
    Admin,
}

/// User record
///
/// Plain data, no attached behavior. The password hash is deliberately not a
/// field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned at creation
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Optional display name, at least 2 characters when present
    pub username: Option<String>,
    /// Role tags
    pub roles: Vec<Role>,
    /// Ordered friend list (user ids)
    pub friends: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Login credentials projection
///
/// The only read path that exposes the stored password hash.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Input for user creation
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub username: Option<String>,
}

/// Check if a user holds the ADMIN role
pub fn is_admin(user: &User) -> bool {
    user.roles.contains(&Role::Admin)
}

/// Validate email shape: one `@`, non-empty sides, a dotted domain, no
/// whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Row shape for reads that exclude the password hash
#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    username: Option<String>,
    roles: String,
    friends: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, ApiError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| ApiError::internal(format!("malformed user id in store: {e}")))?;
        let roles: Vec<Role> = serde_json::from_str(&self.roles)?;
        let friends: Vec<Uuid> = serde_json::from_str(&self.friends)?;

        Ok(User {
            id,
            email: self.email,
            username: self.username,
            roles,
            friends,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const USER_COLUMNS: &str = "id, email, username, roles, friends, created_at, updated_at";

/// Create a new user
///
/// The operation is gated on the requesting user holding the ADMIN role.
/// New users always receive the MEMBER role, regardless of who creates them.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new` - Email, raw password and optional username
/// * `requesting` - The authenticated user performing the creation
///
/// # Errors
/// * `ApiError::Forbidden` - requesting user is not an admin
/// * `ApiError::Validation` - malformed email, short username, empty password
/// * `ApiError::EmailTaken` - the email is already registered
pub async fn create_user(
    pool: &SqlitePool,
    new: NewUser,
    requesting: &User,
) -> Result<User, ApiError> {
    if !is_admin(requesting) {
        tracing::warn!(
            "User {} attempted to create an account without the admin role",
            requesting.email
        );
        return Err(ApiError::Forbidden);
    }

    let email = new.email.trim().to_string();
    if !is_valid_email(&email) {
        return Err(ApiError::validation(format!(
            "\"{email}\" is not a valid email"
        )));
    }
    if let Some(username) = &new.username {
        if username.len() < 2 {
            return Err(ApiError::validation(
                "username must be at least 2 characters",
            ));
        }
    }
    if new.password.is_empty() {
        return Err(ApiError::validation("password must not be empty"));
    }

    // Fast-path rejection only; the unique index is the real guard.
    if count_by_email(pool, &email).await? > 0 {
        return Err(ApiError::EmailTaken);
    }

    let password_hash = password::hash_password(&new.password).await?;

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email,
        username: new.username,
        roles: vec![Role::Member],
        friends: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    insert_user(pool, &user, &password_hash).await?;
    tracing::info!("User created: {} ({})", user.email, user.id);

    Ok(user)
}

/// Seed the bootstrap admin account
///
/// Admin-gated creation needs a first admin to exist. Called at startup when
/// admin credentials are configured; does nothing when the email is already
/// registered.
pub async fn ensure_admin(pool: &SqlitePool, email: &str, raw_password: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if count_by_email(pool, email).await? > 0 {
        return Ok(());
    }

    let password_hash = password::hash_password(raw_password).await?;
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: None,
        roles: vec![Role::Admin],
        friends: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    match insert_user(pool, &user, &password_hash).await {
        Ok(()) => {
            tracing::info!("Seeded admin account: {}", email);
            Ok(())
        }
        // Lost a race against another process seeding the same account
        Err(ApiError::EmailTaken) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Get a user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, ApiError> {
    let id = id.to_string();
    let id = id.as_str();

    let row = db::call(|| async move {
        sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    })
    .await?;

    row.map(UserRow::into_user).transpose()
}

/// Get a user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, ApiError> {
    let row = db::call(|| async move {
        sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
    })
    .await?;

    row.map(UserRow::into_user).transpose()
}

/// Get the credentials projection for login
///
/// This is the only read that returns the password hash.
pub async fn get_credentials_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Credentials>, ApiError> {
    #[derive(sqlx::FromRow)]
    struct CredentialsRow {
        id: String,
        email: String,
        password_hash: String,
    }

    let row = db::call(|| async move {
        sqlx::query_as::<_, CredentialsRow>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    })
    .await?;

    row.map(|r| {
        let user_id = Uuid::parse_str(&r.id)
            .map_err(|e| ApiError::internal(format!("malformed user id in store: {e}")))?;
        Ok(Credentials {
            user_id,
            email: r.email,
            password_hash: r.password_hash,
        })
    })
    .transpose()
}

/// Persist a user's friends list
pub async fn update_friends(pool: &SqlitePool, user: &User) -> Result<(), ApiError> {
    let friends_json = serde_json::to_string(&user.friends)?;
    let friends_json = friends_json.as_str();
    let id = user.id.to_string();
    let id = id.as_str();
    let now = Utc::now();

    db::call(|| async move {
        sqlx::query("UPDATE users SET friends = $1, updated_at = $2 WHERE id = $3")
            .bind(friends_json)
            .bind(now)
            .bind(id)
            .execute(pool)
            .await
            .map(|_| ())
    })
    .await
}

async fn count_by_email(pool: &SqlitePool, email: &str) -> Result<i64, ApiError> {
    db::call(|| async move {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await
    })
    .await
}

async fn insert_user(pool: &SqlitePool, user: &User, password_hash: &str) -> Result<(), ApiError> {
    let roles_json = serde_json::to_string(&user.roles)?;
    let roles_json = roles_json.as_str();
    let friends_json = serde_json::to_string(&user.friends)?;
    let friends_json = friends_json.as_str();
    let id = user.id.to_string();
    let id = id.as_str();

    let result = db::call(|| async move {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, username, password_hash, roles, friends, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(user.email.as_str())
        .bind(user.username.as_deref())
        .bind(password_hash)
        .bind(roles_json)
        .bind(friends_json)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(pool)
        .await
        .map(|_| ())
    })
    .await;

    match result {
        Err(ApiError::Database(sqlx::Error::Database(db_err)))
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            Err(ApiError::EmailTaken)
        }
        other => other,
    }
}
