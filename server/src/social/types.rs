//! Social Content Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fc_common::UserProfile;

use crate::directory::DirectoryError;

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Media attachment reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMedia {
    /// Media URL.
    pub url: String,
    /// Image or video.
    pub kind: MediaKind,
}

/// A post as seen by one viewer.
///
/// The author profile is joined from the user directory on every read,
/// never embedded at creation time, so it cannot go stale.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post ID.
    pub id: Uuid,
    /// Author profile (joined on read).
    pub author: UserProfile,
    /// Post text.
    pub content: String,
    /// Optional media attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<PostMedia>,
    /// Like count.
    pub likes: u64,
    /// Comment count.
    pub comments: u64,
    /// Share count.
    pub shares: u64,
    /// Whether the requesting viewer has liked this post.
    pub is_liked: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    /// Comment ID.
    pub id: Uuid,
    /// Post this comment belongs to.
    pub post_id: Uuid,
    /// Author profile (joined on read).
    pub author: UserProfile,
    /// Comment text.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// Request to create a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostBody {
    /// Post text (may be empty when media is attached).
    #[validate(length(max = 4000))]
    pub content: String,
    /// Optional media attachment.
    pub media: Option<PostMedia>,
}

/// Request to edit the viewer's own profile. Omitted fields are left
/// untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileBody {
    #[validate(length(min = 1, max = 64))]
    pub full_name: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// Request to set the viewer's like state on a post.
#[derive(Debug, Deserialize)]
pub struct SetLikeBody {
    /// `true` to like, `false` to unlike.
    pub liked: bool,
}

/// Request to comment on a post.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentBody {
    #[validate(length(max = 2000))]
    pub content: String,
}

/// Error types for social content operations.
#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl axum::response::IntoResponse for SocialError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code) = match &self {
            Self::PostNotFound => (StatusCode::NOT_FOUND, "POST_NOT_FOUND"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Directory(err) => match err {
                DirectoryError::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
                DirectoryError::SelfFollow => (StatusCode::BAD_REQUEST, "SELF_FOLLOW"),
                DirectoryError::EmailTaken | DirectoryError::UsernameTaken => {
                    (StatusCode::CONFLICT, "ALREADY_EXISTS")
                }
            },
        };

        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}
