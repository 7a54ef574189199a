//! Notification fan-out
//!
//! Append-only, most-recent-first notification log with per-entry read
//! state. Interaction flows (likes, comments, shares, follows, messages,
//! verification) all fan out through [`NotificationStore`].

mod handlers;
mod store;
mod types;

pub use store::NotificationStore;
pub use types::{Notification, NotificationKind, NotifyError};

use axum::routing::{get, post};
use axum::Router;

use crate::api::AppState;

/// Notification routes (all require authentication).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notifications", get(handlers::list_notifications))
        .route("/api/notifications/unread", get(handlers::unread_count))
        .route(
            "/api/notifications/{id}/read",
            post(handlers::mark_notification_read),
        )
}
