//! Verification Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fc_common::UserRole;
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::auth::AuthUser;

use super::types::{
    ReviewDocumentBody, SubmitDocumentBody, VerificationDocument, VerificationError,
};

/// POST /api/verification/documents
pub async fn submit_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SubmitDocumentBody>,
) -> Result<(StatusCode, Json<VerificationDocument>), VerificationError> {
    body.validate()
        .map_err(|e| VerificationError::Validation(e.to_string()))?;

    let document = state.verification.submit(
        auth.id,
        &body.file_name,
        &body.file_url,
        body.document_type,
    )?;

    tracing::info!(user_id = %auth.id, document_id = %document.id, "verification document submitted");

    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/verification/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<Vec<VerificationDocument>> {
    Json(state.verification.list_for(auth.id))
}

/// GET /api/verification/pending
pub async fn list_pending(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<VerificationDocument>>, VerificationError> {
    if auth.role != UserRole::Expert {
        return Err(VerificationError::ExpertRequired);
    }

    Ok(Json(state.verification.list_pending()))
}

/// POST /api/verification/documents/{id}/review
pub async fn review_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(document_id): Path<Uuid>,
    Json(body): Json<ReviewDocumentBody>,
) -> Result<Json<VerificationDocument>, VerificationError> {
    if auth.role != UserRole::Expert {
        return Err(VerificationError::ExpertRequired);
    }

    body.validate()
        .map_err(|e| VerificationError::Validation(e.to_string()))?;

    let document = state
        .verification
        .review(document_id, auth.id, body.approve, body.comments)?;

    tracing::info!(
        reviewer_id = %auth.id,
        document_id = %document.id,
        approved = body.approve,
        "verification document reviewed"
    );

    Ok(Json(document))
}
