//! Play Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fc_common::SportsCategory;

use crate::directory::DirectoryError;

/// A user's token balance.
#[derive(Debug, Clone, Serialize)]
pub struct TokenWallet {
    pub user_id: Uuid,
    pub balance: u64,
    pub total_earned: u64,
    pub total_spent: u64,
}

/// Whether a video costs tokens to watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Free,
    Premium,
}

/// A training video published by a coach.
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: Uuid,
    pub coach_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: SportsCategory,
    pub kind: VideoKind,
    /// Token price. Zero for free videos.
    pub price: u64,
    /// Length in seconds.
    pub duration: u64,
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

/// Request body for publishing a video.
#[derive(Debug, Deserialize, Validate)]
pub struct UploadVideoBody {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
    pub kind: VideoKind,
    #[serde(default)]
    pub price: u64,
    pub duration: u64,
}

/// Query filters for the video catalogue.
#[derive(Debug, Default, Deserialize)]
pub struct VideoFilter {
    pub category: Option<SportsCategory>,
    pub kind: Option<VideoKind>,
}

/// A recurring coaching programme users can join.
#[derive(Debug, Clone, Serialize)]
pub struct Membership {
    pub id: Uuid,
    pub coach_id: Uuid,
    pub name: String,
    pub description: String,
    /// Token price per month.
    pub price: u64,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a membership programme.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMembershipBody {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
    pub price: u64,
}

/// Error types for play operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("Video not found")]
    VideoNotFound,

    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Insufficient token balance")]
    InsufficientTokens,

    #[error("Only coaches can publish here")]
    CoachRequired,

    #[error("Already a member")]
    AlreadyMember,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl axum::response::IntoResponse for PlayError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code) = match &self {
            Self::VideoNotFound => (StatusCode::NOT_FOUND, "VIDEO_NOT_FOUND"),
            Self::MembershipNotFound => (StatusCode::NOT_FOUND, "MEMBERSHIP_NOT_FOUND"),
            Self::InsufficientTokens => (StatusCode::PAYMENT_REQUIRED, "INSUFFICIENT_TOKENS"),
            Self::CoachRequired => (StatusCode::FORBIDDEN, "COACH_REQUIRED"),
            Self::AlreadyMember => (StatusCode::CONFLICT, "ALREADY_MEMBER"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Directory(DirectoryError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND")
            }
            Self::Directory(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}
