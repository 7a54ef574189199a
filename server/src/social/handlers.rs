//! Social HTTP Handlers
//!
//! Post, comment, discovery, and follow-graph endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use fc_common::{User, UserProfile};

use super::types::{
    AddCommentBody, Comment, CreatePostBody, Post, SetLikeBody, SocialError, UpdateProfileBody,
};
use crate::api::AppState;
use crate::auth::AuthUser;
use crate::directory::ProfileUpdate;
use crate::notify::NotificationKind;

/// GET /api/feed
/// Category-scoped feed for the authenticated user.
pub async fn get_feed(State(state): State<AppState>, auth: AuthUser) -> Json<Vec<Post>> {
    Json(state.content.get_feed(auth.id, auth.sports_category))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePostBody>,
) -> Result<(StatusCode, Json<Post>), SocialError> {
    body.validate()
        .map_err(|e| SocialError::Validation(e.to_string()))?;

    let post = state.content.create_post(auth.id, &body.content, body.media)?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, SocialError> {
    Ok(Json(state.content.get_post(post_id, auth.id)?))
}

/// PUT /api/posts/:id/like
/// Set the viewer's like state; the counter moves on transitions only.
pub async fn set_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<SetLikeBody>,
) -> Result<Json<Post>, SocialError> {
    let post = state.content.set_like(post_id, auth.id, body.liked)?;
    Ok(Json(post))
}

/// POST /api/posts/:id/share
pub async fn share_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, SocialError> {
    let post = state.content.set_share(post_id, auth.id)?;
    Ok(Json(post))
}

/// POST /api/posts/:id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<AddCommentBody>,
) -> Result<(StatusCode, Json<Comment>), SocialError> {
    body.validate()
        .map_err(|e| SocialError::Validation(e.to_string()))?;

    let comment = state.content.add_comment(post_id, auth.id, &body.content)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/posts/:id/comments
/// Comments on a post, oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, SocialError> {
    Ok(Json(state.content.get_post_comments(post_id)?))
}

/// GET /api/users
/// Discover users in the viewer's sports category (excluding the viewer).
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> Json<Vec<UserProfile>> {
    Json(
        state
            .directory
            .list_by_category(auth.sports_category, Some(auth.id)),
    )
}

/// PUT /api/users/me
/// Partial edit of the viewer's own profile.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<User>, SocialError> {
    body.validate()
        .map_err(|e| SocialError::Validation(e.to_string()))?;

    let user = state.directory.update_profile(
        auth.id,
        ProfileUpdate {
            full_name: body.full_name,
            bio: body.bio,
            avatar_url: body.avatar_url,
        },
    )?;

    Ok(Json(user))
}

/// GET /api/users/:id
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, SocialError> {
    Ok(Json(state.directory.profile(user_id)?))
}

/// GET /api/users/:id/posts
pub async fn get_user_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, SocialError> {
    Ok(Json(state.content.get_user_posts(user_id, auth.id)?))
}

/// GET /api/users/:id/shared-posts
pub async fn get_shared_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, SocialError> {
    Ok(Json(state.content.get_shared_posts(user_id, auth.id)?))
}

/// POST /api/users/:id/follow
/// Follow a user; the first transition notifies the followee.
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, SocialError> {
    let newly_followed = state.directory.follow(auth.id, user_id)?;

    if newly_followed {
        let follower = state.directory.profile(auth.id)?;
        state.notifications.notify(
            user_id,
            NotificationKind::Follow,
            format!("{} started following you", follower.full_name),
            Some(follower),
        );
    }

    Ok(Json(state.directory.profile(user_id)?))
}

/// DELETE /api/users/:id/follow
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, SocialError> {
    state.directory.unfollow(auth.id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/:id/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<UserProfile>>, SocialError> {
    Ok(Json(state.directory.followers_of(user_id)?))
}

/// GET /api/users/:id/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<UserProfile>>, SocialError> {
    Ok(Json(state.directory.following_of(user_id)?))
}
