//! Play Surface
//!
//! Token wallets, coach-published training videos, and membership
//! programmes. Premium content is paid for in tokens.

pub mod handlers;
pub mod store;
pub mod types;

pub use store::PlayStore;
pub use types::{Membership, PlayError, TokenWallet, Video, VideoKind};

use axum::routing::{get, post};
use axum::Router;

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/videos",
            get(handlers::list_videos).post(handlers::upload_video),
        )
        .route("/api/videos/{id}/unlock", post(handlers::unlock_video))
        .route("/api/wallet", get(handlers::get_wallet))
        .route(
            "/api/memberships",
            get(handlers::list_memberships).post(handlers::create_membership),
        )
        .route(
            "/api/memberships/{id}/join",
            post(handlers::join_membership),
        )
}
