//! Messaging HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use super::types::{ChatError, Conversation, Message, SendMessageBody};
use crate::api::AppState;
use crate::auth::AuthUser;
use crate::directory::DirectoryError;

/// Response after marking a thread read.
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    /// Number of messages that transitioned to read.
    pub marked: usize,
}

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SendMessageBody>,
) -> Result<(StatusCode, Json<Message>), ChatError> {
    body.validate()
        .map_err(|e| ChatError::Validation(e.to_string()))?;

    let message =
        state
            .messaging
            .send_message(auth.id, body.receiver_id, &body.content, body.kind)?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/conversations
/// One conversation per other user in the viewer's sports category.
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Conversation>>, ChatError> {
    let viewer = state
        .directory
        .get(auth.id)
        .ok_or(DirectoryError::UserNotFound)?;
    let conversations = state
        .messaging
        .get_conversations(&viewer, viewer.sports_category);
    Ok(Json(conversations))
}

/// GET /api/conversations/:user_id/messages
/// Full thread with another user, oldest first.
pub async fn get_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(other_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ChatError> {
    Ok(Json(state.messaging.get_thread(auth.id, other_id)?))
}

/// POST /api/conversations/:user_id/read
/// Mark everything the other user sent to the viewer as read.
pub async fn mark_thread_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(other_id): Path<Uuid>,
) -> Result<Json<MarkReadResponse>, ChatError> {
    let marked = state.messaging.mark_thread_read(auth.id, other_id)?;
    Ok(Json(MarkReadResponse { marked }))
}
