//! API Router and Application State
//!
//! Central routing configuration and shared state.

use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth, chat,
    chat::MessagingStore,
    config::Config,
    directory::UserDirectory,
    notify,
    notify::NotificationStore,
    play,
    play::PlayStore,
    social,
    social::{ContentStore, ShareConfig},
    verification,
    verification::VerificationStore,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// User accounts and the follow graph
    pub directory: Arc<UserDirectory>,
    /// Posts, comments, likes, and shares
    pub content: Arc<ContentStore>,
    /// Direct messages and conversations
    pub messaging: Arc<MessagingStore>,
    /// Notification fan-out
    pub notifications: Arc<NotificationStore>,
    /// Credential documents and expert review
    pub verification: Arc<VerificationStore>,
    /// Wallets, videos, and memberships
    pub play: Arc<PlayStore>,
}

impl AppState {
    /// Create new application state with freshly wired stores.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let directory = Arc::new(UserDirectory::new());
        let notifications = Arc::new(NotificationStore::new());
        let content = Arc::new(ContentStore::new(
            directory.clone(),
            notifications.clone(),
            ShareConfig {
                allow_repeated: config.allow_repeated_shares,
                notification_kind: config.share_notification_kind,
            },
        ));
        let messaging = Arc::new(MessagingStore::new(
            directory.clone(),
            notifications.clone(),
        ));
        let verification = Arc::new(VerificationStore::new(
            directory.clone(),
            notifications.clone(),
        ));
        let play = Arc::new(PlayStore::new(directory.clone(), config.signup_token_grant));

        Self {
            config: Arc::new(config),
            directory,
            content,
            messaging,
            notifications,
            verification,
            play,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes that require authentication
    let protected_routes = Router::new()
        .route("/auth/me", get(auth::handlers::me))
        .merge(social::router())
        .merge(chat::router())
        .merge(notify::router())
        .merge(verification::router())
        .merge(play::router())
        .layer(from_fn_with_state(state.clone(), auth::require_auth));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Public auth routes
        .route("/auth/register", post(auth::handlers::register))
        .route("/auth/login", post(auth::handlers::login))
        .merge(protected_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Registered accounts
    users: usize,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        users: state.directory.len(),
    })
}
