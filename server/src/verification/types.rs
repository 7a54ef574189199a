//! Verification Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::directory::DirectoryError;

/// Kind of document submitted for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Certificate,
    Id,
    License,
}

/// Review state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

/// A credential document submitted for expert review.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationDocument {
    /// Document ID.
    pub id: Uuid,
    /// Submitting user.
    pub user_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Where the file lives.
    pub file_url: String,
    /// Document kind.
    pub document_type: DocumentType,
    /// Review state.
    pub status: DocumentStatus,
    /// When it was submitted.
    pub uploaded_at: DateTime<Utc>,
    /// When it was reviewed, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewing expert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Uuid>,
    /// Reviewer comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Request to submit a document.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitDocumentBody {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(url)]
    pub file_url: String,
    pub document_type: DocumentType,
}

/// Review decision.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewDocumentBody {
    /// `true` to approve, `false` to reject.
    pub approve: bool,
    /// Optional reviewer comments.
    #[validate(length(max = 1000))]
    pub comments: Option<String>,
}

/// Error types for verification operations.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("Document not found")]
    DocumentNotFound,

    #[error("Document has already been reviewed")]
    AlreadyReviewed,

    #[error("Only experts can review documents")]
    ExpertRequired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl axum::response::IntoResponse for VerificationError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code) = match &self {
            Self::DocumentNotFound => (StatusCode::NOT_FOUND, "DOCUMENT_NOT_FOUND"),
            Self::AlreadyReviewed => (StatusCode::BAD_REQUEST, "ALREADY_REVIEWED"),
            Self::ExpertRequired => (StatusCode::FORBIDDEN, "EXPERT_REQUIRED"),
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
