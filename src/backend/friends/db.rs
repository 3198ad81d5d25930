//! Database operations for chat threads
//!
//! A chat thread is created whenever a friend edge is added. Participants
//! are stored as a JSON array of user ids, mirroring the friends column on
//! the users table.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::db;
use crate::backend::error::ApiError;

/// Chat thread record
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: Uuid,
    pub participants: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create a chat thread for the given participants
pub async fn create_chat(pool: &SqlitePool, participants: &[Uuid]) -> Result<Chat, ApiError> {
    let chat = Chat {
        id: Uuid::new_v4(),
        participants: participants.to_vec(),
        created_at: Utc::now(),
    };

    let id = chat.id.to_string();
    let id = id.as_str();
    let participants_json = serde_json::to_string(&chat.participants)?;
    let participants_json = participants_json.as_str();
    let created_at = chat.created_at;

    db::call(|| async move {
        sqlx::query("INSERT INTO chats (id, participants, created_at) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(participants_json)
            .bind(created_at)
            .execute(pool)
            .await
            .map(|_| ())
    })
    .await?;

    Ok(chat)
}

/// Get every chat thread a user participates in
pub async fn chats_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Chat>, ApiError> {
    #[derive(sqlx::FromRow)]
    struct ChatRow {
        id: String,
        participants: String,
        created_at: DateTime<Utc>,
    }

    let user_id = user_id.to_string();
    let pattern = format!("%\"{user_id}\"%");
    let pattern = pattern.as_str();

    let rows = db::call(|| async move {
        sqlx::query_as::<_, ChatRow>(
            "SELECT id, participants, created_at FROM chats WHERE participants LIKE $1 ORDER BY created_at ASC",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    })
    .await?;

    rows.into_iter()
        .map(|row| {
            let id = Uuid::parse_str(&row.id)
                .map_err(|e| ApiError::internal(format!("malformed chat id in store: {e}")))?;
            let participants: Vec<Uuid> = serde_json::from_str(&row.participants)?;
            Ok(Chat {
                id,
                participants,
                created_at: row.created_at,
            })
        })
        .collect()
}
