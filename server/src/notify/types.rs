//! Notification Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fc_common::UserProfile;

/// What kind of interaction produced a notification.
///
/// `Share` only appears when the server is configured to emit a distinct
/// kind for shares; the stock configuration reuses `Comment`, matching
/// the platform's historical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Share,
    Verification,
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "comment" => Ok(Self::Comment),
            "follow" => Ok(Self::Follow),
            "share" => Ok(Self::Share),
            "verification" => Ok(Self::Verification),
            other => Err(format!("unknown notification kind: {other}")),
        }
    }
}

/// A notification delivered to one user.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// Notification ID.
    pub id: Uuid,
    /// The user this notification is addressed to.
    pub target_user_id: Uuid,
    /// Interaction kind.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// Whether the target has read it.
    pub is_read: bool,
    /// The user whose action produced it, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_user: Option<UserProfile>,
    /// When it was created.
    pub created_at: DateTime<Utc>,
}

/// Error types for notification operations.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification not found")]
    NotFound,
}

impl axum::response::IntoResponse for NotifyError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "NOTIFICATION_NOT_FOUND"),
        };

        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}
