//! Play Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::api::AppState;
use crate::auth::AuthUser;

use super::types::{
    CreateMembershipBody, Membership, PlayError, TokenWallet, UploadVideoBody, Video, VideoFilter,
};

/// GET /api/videos
pub async fn list_videos(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<VideoFilter>,
) -> Json<Vec<Video>> {
    Json(state.play.list_videos(&filter))
}

/// POST /api/videos
pub async fn upload_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UploadVideoBody>,
) -> Result<(StatusCode, Json<Video>), PlayError> {
    body.validate()
        .map_err(|e| PlayError::Validation(e.to_string()))?;

    let video = state.play.upload_video(
        auth.id,
        &body.title,
        &body.description,
        body.kind,
        body.price,
        body.duration,
    )?;

    tracing::info!(coach_id = %auth.id, video_id = %video.id, "video published");

    Ok((StatusCode::CREATED, Json(video)))
}

/// POST /api/videos/{id}/unlock
pub async fn unlock_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(video_id): Path<Uuid>,
) -> Result<Json<Video>, PlayError> {
    let video = state.play.unlock_video(video_id, auth.id)?;
    Ok(Json(video))
}

/// GET /api/wallet
pub async fn get_wallet(State(state): State<AppState>, auth: AuthUser) -> Json<TokenWallet> {
    Json(state.play.wallet(auth.id))
}

/// GET /api/memberships
pub async fn list_memberships(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<Vec<Membership>> {
    Json(state.play.list_memberships())
}

/// POST /api/memberships
pub async fn create_membership(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateMembershipBody>,
) -> Result<(StatusCode, Json<Membership>), PlayError> {
    body.validate()
        .map_err(|e| PlayError::Validation(e.to_string()))?;

    let membership =
        state
            .play
            .create_membership(auth.id, &body.name, &body.description, body.price)?;

    Ok((StatusCode::CREATED, Json(membership)))
}

/// POST /api/memberships/{id}/join
pub async fn join_membership(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(membership_id): Path<Uuid>,
) -> Result<Json<Membership>, PlayError> {
    let membership = state.play.join_membership(membership_id, auth.id)?;

    tracing::info!(user_id = %auth.id, membership_id = %membership.id, "membership joined");

    Ok(Json(membership))
}
