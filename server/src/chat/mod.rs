//! Direct Messaging
//!
//! Message log, derived conversations, and read state.

mod handlers;
mod store;
mod types;

pub use store::MessagingStore;
pub use types::{ChatError, Conversation, Message, MessageKind, SendMessageBody};

use axum::routing::{get, post};
use axum::Router;

use crate::api::AppState;

/// Messaging routes (all require authentication).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/messages", post(handlers::send_message))
        .route("/api/conversations", get(handlers::list_conversations))
        .route(
            "/api/conversations/{user_id}/messages",
            get(handlers::get_thread),
        )
        .route(
            "/api/conversations/{user_id}/read",
            post(handlers::mark_thread_read),
        )
}
