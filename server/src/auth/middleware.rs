//! Authentication Middleware

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use fc_common::{SportsCategory, User, UserRole};

use crate::api::AppState;

use super::error::AuthError;
use super::jwt::validate_access_token;

/// Authenticated user injected into request extensions.
///
/// A minimal snapshot of the current user; handlers needing the full
/// record or fresh counters re-read through the directory.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Platform role.
    pub role: UserRole,
    /// Sports category scoping the user's views.
    pub sports_category: SportsCategory,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            sports_category: user.sports_category,
        }
    }
}

/// Middleware to require authentication.
///
/// Extracts the Bearer token from the Authorization header, validates
/// the JWT, resolves the user through the directory, and injects
/// [`AuthUser`] into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    let claims = validate_access_token(token, &state.config.jwt_secret)?;

    let user_id: Uuid = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

    let user = state
        .directory
        .get(user_id)
        .ok_or(AuthError::UserNotFound)?;

    request.extensions_mut().insert(AuthUser::from(user));

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user in handlers.
///
/// Only valid on routes behind [`require_auth`].
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(AuthError::MissingAuthHeader)
    }
}
