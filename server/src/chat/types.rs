//! Messaging Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fc_common::UserProfile;

use crate::directory::DirectoryError;

/// Kind of message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Video,
}

/// A direct message between two users.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message ID.
    pub id: Uuid,
    /// Sending user.
    pub sender_id: Uuid,
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Message content.
    pub content: String,
    /// Payload kind.
    pub kind: MessageKind,
    /// Whether the receiver has read it.
    pub is_read: bool,
    /// When it was sent.
    pub created_at: DateTime<Utc>,
}

/// A conversation with one other user, derived on every query from the
/// message log; nothing is stored per conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    /// Stable pair identifier (`conv-{viewer}-{other}`).
    pub id: String,
    /// The other participant.
    pub participant: UserProfile,
    /// Most recent message in the pair, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    /// Messages addressed to the viewer and not yet read.
    pub unread_count: u64,
    /// Last-activity timestamp used for ordering. Defaults to the query
    /// time for pairs with no messages yet, which sorts them to the top.
    pub updated_at: DateTime<Utc>,
}

/// Request to send a direct message.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageBody {
    /// Receiving user.
    pub receiver_id: Uuid,
    /// Message content.
    #[validate(length(max = 4000))]
    pub content: String,
    /// Payload kind (defaults to text).
    #[serde(default)]
    pub kind: MessageKind,
}

/// Error types for messaging operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl axum::response::IntoResponse for ChatError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code) = match &self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Directory(err) => match err {
                DirectoryError::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
                _ => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            },
        };

        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}
