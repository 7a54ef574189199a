//! Shared helpers for store unit tests.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use fc_common::{SportsCategory, User, UserRole};

use crate::directory::UserDirectory;

pub fn test_directory() -> Arc<UserDirectory> {
    Arc::new(UserDirectory::new())
}

/// Insert a user with a throwaway password hash, returning the id.
pub fn seed_user(
    directory: &UserDirectory,
    username: &str,
    role: UserRole,
    category: SportsCategory,
) -> Uuid {
    let user = User {
        id: Uuid::now_v7(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        full_name: format!("{username} Test"),
        role,
        sports_category: category,
        is_verified: false,
        avatar_url: None,
        bio: None,
        followers: 0,
        following: 0,
        posts: 0,
        created_at: Utc::now(),
    };
    let id = user.id;
    directory
        .insert(user, "unusable-hash".into())
        .expect("seeding test user");
    id
}
