//! JWT Token Generation and Validation
//!
//! HS256 access tokens signed with the server secret. There is no
//! refresh-token or revocation machinery; clients re-login when the
//! access token expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AuthError, AuthResult};

/// JWT claims for access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string).
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

/// Generate an access token for a user.
pub fn generate_access_token(
    user_id: Uuid,
    secret: &str,
    expiry_seconds: i64,
) -> AuthResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
        iat: now.timestamp(),
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Validate and decode an access token.
pub fn validate_access_token(token: &str, secret: &str) -> AuthResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let user_id = Uuid::now_v7();
        let token = generate_access_token(user_id, "test-secret", 900).unwrap();
        let claims = validate_access_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = generate_access_token(Uuid::now_v7(), "test-secret", 900).unwrap();
        assert!(matches!(
            validate_access_token(&token, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = generate_access_token(Uuid::now_v7(), "test-secret", -10).unwrap();
        assert!(matches!(
            validate_access_token(&token, "test-secret"),
            Err(AuthError::TokenExpired)
        ));
    }
}
