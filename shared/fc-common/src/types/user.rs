//! User Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform role.
///
/// Roles are fixed at registration; only `User` and `Coach` are
/// self-selectable. `Expert` accounts review verification documents
/// and are provisioned out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular member following coaches.
    User,
    /// Content-producing coach.
    Coach,
    /// Verification reviewer.
    Expert,
}

/// Sports category partitioning feeds and conversations.
///
/// Every account belongs to exactly one category; feed and conversation
/// visibility never crosses category boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SportsCategory {
    Coco,
    MartialArts,
    CalorieFight,
}

impl SportsCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Coco, Self::MartialArts, Self::CalorieFight];

    /// Kebab-case name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coco => "coco",
            Self::MartialArts => "martial-arts",
            Self::CalorieFight => "calorie-fight",
        }
    }
}

impl std::fmt::Display for SportsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SportsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coco" => Ok(Self::Coco),
            "martial-arts" => Ok(Self::MartialArts),
            "calorie-fight" => Ok(Self::CalorieFight),
            other => Err(format!("unknown sports category: {other}")),
        }
    }
}

/// Full user record (for the authenticated user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Uuid,
    /// Email address (unique, login identifier).
    pub email: String,
    /// Username (unique).
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Platform role.
    pub role: UserRole,
    /// Sports category scoping feed and conversation visibility.
    pub sports_category: SportsCategory,
    /// Whether an expert has verified this account.
    pub is_verified: bool,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Short profile bio.
    pub bio: Option<String>,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Authored post count.
    pub posts: u64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// User profile (public information).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID.
    pub id: Uuid,
    /// Username (unique).
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Platform role.
    pub role: UserRole,
    /// Sports category.
    pub sports_category: SportsCategory,
    /// Whether an expert has verified this account.
    pub is_verified: bool,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Short profile bio.
    pub bio: Option<String>,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Authored post count.
    pub posts: u64,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            sports_category: user.sports_category,
            is_verified: user.is_verified,
            avatar_url: user.avatar_url,
            bio: user.bio,
            followers: user.followers,
            following: user.following,
            posts: user.posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sports_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&SportsCategory::MartialArts).unwrap(),
            "\"martial-arts\""
        );
        assert_eq!(
            serde_json::to_string(&SportsCategory::CalorieFight).unwrap(),
            "\"calorie-fight\""
        );
        let parsed: SportsCategory = serde_json::from_str("\"coco\"").unwrap();
        assert_eq!(parsed, SportsCategory::Coco);
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Coach).unwrap(), "\"coach\"");
        let parsed: UserRole = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(parsed, UserRole::Expert);
    }

    #[test]
    fn test_category_from_str_round_trip() {
        for cat in SportsCategory::ALL {
            assert_eq!(cat.as_str().parse::<SportsCategory>().unwrap(), cat);
        }
        assert!("yoga".parse::<SportsCategory>().is_err());
    }
}
