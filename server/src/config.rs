//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::notify::NotificationKind;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// JWT signing secret
    pub jwt_secret: String,

    /// JWT access token expiry in seconds (default: 86400 = 24 hours)
    pub jwt_access_expiry: i64,

    /// Whether a user may share the same post more than once
    /// (default: true)
    pub allow_repeated_shares: bool,

    /// Notification kind emitted when a post is shared
    /// (default: comment)
    pub share_notification_kind: NotificationKind,

    /// Tokens granted to every new account (default: 100)
    pub signup_token_grant: u64,

    /// Whether to seed demo accounts and posts at startup
    pub seed_demo_data: bool,

    /// Password for the seeded demo accounts
    pub demo_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_access_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86400),
            allow_repeated_shares: env::var("ALLOW_REPEATED_SHARES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            share_notification_kind: env::var("SHARE_NOTIFICATION_KIND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(NotificationKind::Comment),
            signup_token_grant: env::var("SIGNUP_TOKEN_GRANT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            demo_password: env::var("DEMO_PASSWORD").unwrap_or_else(|_| "password123".into()),
        })
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            jwt_secret: "test-secret".into(),
            jwt_access_expiry: 86400,
            allow_repeated_shares: true,
            share_notification_kind: NotificationKind::Comment,
            signup_token_grant: 100,
            seed_demo_data: false,
            demo_password: "password123".into(),
        }
    }
}
