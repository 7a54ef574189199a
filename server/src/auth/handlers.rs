//! Authentication HTTP Handlers
//!
//! Registration and login against the in-memory directory. Passwords
//! are argon2-hashed; sessions are stateless HS256 access tokens.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fc_common::{SportsCategory, User, UserRole};

use super::error::{AuthError, AuthResult};
use super::jwt::generate_access_token;
use super::middleware::AuthUser;
use super::password::{hash_password, verify_password};
use crate::api::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address (login identifier).
    #[validate(email)]
    pub email: String,
    /// Password (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Username (3-32 lowercase alphanumeric + underscore).
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    /// Full display name.
    #[validate(length(min = 1, max = 64))]
    pub full_name: String,
    /// Requested role; only `user` and `coach` are self-selectable.
    pub role: UserRole,
    /// Sports category.
    pub sports_category: SportsCategory,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Authentication response with the access token and user record.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Access token.
    pub access_token: String,
    /// Token type (always "Bearer").
    pub token_type: String,
    /// Access token expiry in seconds.
    pub expires_in: i64,
    /// The authenticated user.
    pub user: User,
}

// ============================================================================
// Regex for validation
// ============================================================================

/// Username validation regex.
static USERNAME_REGEX: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"^[a-z0-9_]{3,32}$").unwrap());

// ============================================================================
// Handlers
// ============================================================================

/// Register a new user.
///
/// New accounts start unverified with all counters at zero and receive
/// the configured signup token grant.
///
/// POST /auth/register
#[tracing::instrument(skip(state, body), fields(username = %body.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)> {
    body.validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    if !USERNAME_REGEX.is_match(&body.username) {
        return Err(AuthError::Validation(
            "Username must be 3-32 lowercase alphanumeric or underscore characters".into(),
        ));
    }
    if body.role == UserRole::Expert {
        return Err(AuthError::Validation(
            "Expert accounts cannot be self-registered".into(),
        ));
    }

    let user = User {
        id: Uuid::now_v7(),
        email: body.email.trim().to_lowercase(),
        username: body.username.clone(),
        full_name: body.full_name.trim().to_string(),
        role: body.role,
        sports_category: body.sports_category,
        is_verified: false,
        avatar_url: None,
        bio: None,
        followers: 0,
        following: 0,
        posts: 0,
        created_at: Utc::now(),
    };

    let password_hash = hash_password(&body.password)?;
    state.directory.insert(user.clone(), password_hash)?;
    state.play.ensure_wallet(user.id);

    tracing::info!(user_id = %user.id, "User registered");

    let access_token = generate_access_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_access_expiry,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            token_type: "Bearer".into(),
            expires_in: state.config.jwt_access_expiry,
            user,
        }),
    ))
}

/// Log in with email and password.
///
/// POST /auth/login
#[tracing::instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>> {
    let (user, password_hash) = state
        .directory
        .find_by_email(&body.email)
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&body.password, &password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let access_token = generate_access_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_access_expiry,
    )?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".into(),
        expires_in: state.config.jwt_access_expiry,
        user,
    }))
}

/// Current user record.
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AuthResult<Json<User>> {
    let user = state.directory.get(auth.id).ok_or(AuthError::UserNotFound)?;
    Ok(Json(user))
}
