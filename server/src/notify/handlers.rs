//! Notification HTTP Handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use super::types::{Notification, NotifyError};
use crate::api::AppState;
use crate::auth::AuthUser;

/// Unread-count response.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: usize,
}

/// GET /api/notifications
/// List the authenticated user's notifications, most-recent-first.
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<Vec<Notification>> {
    Json(state.notifications.list_for(auth.id))
}

/// GET /api/notifications/unread
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<UnreadCountResponse> {
    Json(UnreadCountResponse {
        unread: state.notifications.unread_count(auth.id),
    })
}

/// POST /api/notifications/:id/read
/// Mark a notification as read (idempotent).
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, NotifyError> {
    let notification = state.notifications.mark_read_for(id, auth.id)?;
    Ok(Json(notification))
}
