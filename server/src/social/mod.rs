//! Social Graph & Content
//!
//! Posts, comments, likes, shares, user discovery, and the follow graph.

mod handlers;
mod store;
mod types;

pub use store::{ContentStore, ShareConfig};
pub use types::{
    Comment, CreatePostBody, MediaKind, Post, PostMedia, SocialError, UpdateProfileBody,
};

use axum::routing::{get, post, put};
use axum::Router;

use crate::api::AppState;

/// Social routes (all require authentication).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/feed", get(handlers::get_feed))
        .route("/api/posts", post(handlers::create_post))
        .route("/api/posts/{id}", get(handlers::get_post))
        .route("/api/posts/{id}/like", put(handlers::set_like))
        .route("/api/posts/{id}/share", post(handlers::share_post))
        .route(
            "/api/posts/{id}/comments",
            get(handlers::list_comments).post(handlers::add_comment),
        )
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/me", put(handlers::update_profile))
        .route("/api/users/{id}", get(handlers::get_user_profile))
        .route("/api/users/{id}/posts", get(handlers::get_user_posts))
        .route("/api/users/{id}/shared-posts", get(handlers::get_shared_posts))
        .route(
            "/api/users/{id}/follow",
            post(handlers::follow_user).delete(handlers::unfollow_user),
        )
        .route("/api/users/{id}/followers", get(handlers::list_followers))
        .route("/api/users/{id}/following", get(handlers::list_following))
}
