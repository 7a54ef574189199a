//! User Directory
//!
//! Normalized in-memory storage for user records, credential lookup,
//! the follow graph, and per-user shared-post sets. All other stores
//! reference users by id and join through this directory on read, so
//! profile data is never embedded as a stale snapshot.

use std::collections::HashSet;
use std::sync::{Mutex, RwLock};

use dashmap::DashMap;
use uuid::Uuid;

use fc_common::{SportsCategory, User, UserProfile};

/// Errors from directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Cannot follow yourself")]
    SelfFollow,
}

/// Partial profile edit. `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Stored user record with credential material.
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// In-memory user directory.
///
/// User records are keyed by id with unique email/username indexes.
/// Reads return snapshot clones; a read issued after a write always
/// observes that write within the process.
pub struct UserDirectory {
    users: DashMap<Uuid, UserRecord>,
    email_index: DashMap<String, Uuid>,
    username_index: DashMap<String, Uuid>,
    /// Serializes insertions so both uniqueness checks and both index
    /// writes commit as one step.
    insert_lock: Mutex<()>,
    /// Follow edges as (follower, followee) pairs.
    ///
    /// Displayed follower/following counters on the user record are the
    /// seeded baseline plus the live edge delta.
    follows: RwLock<HashSet<(Uuid, Uuid)>>,
    /// Post ids each user has shared.
    shared_posts: DashMap<Uuid, HashSet<Uuid>>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            email_index: DashMap::new(),
            username_index: DashMap::new(),
            insert_lock: Mutex::new(()),
            follows: RwLock::new(HashSet::new()),
            shared_posts: DashMap::new(),
        }
    }

    /// Insert a new user with their password hash.
    ///
    /// Fails if the email or username is already registered. Emails are
    /// matched case-insensitively.
    pub fn insert(&self, user: User, password_hash: String) -> Result<(), DirectoryError> {
        let email_key = user.email.to_lowercase();
        let username_key = user.username.to_lowercase();

        // Check-then-insert across two indexes; without the lock two
        // concurrent registrations for the same email both pass the
        // checks.
        let _guard = self.insert_lock.lock().expect("insert lock poisoned");

        if self.email_index.contains_key(&email_key) {
            return Err(DirectoryError::EmailTaken);
        }
        if self.username_index.contains_key(&username_key) {
            return Err(DirectoryError::UsernameTaken);
        }

        self.email_index.insert(email_key, user.id);
        self.username_index.insert(username_key, user.id);
        self.users.insert(user.id, UserRecord { user, password_hash });
        Ok(())
    }

    /// Look up a user by id, returning a snapshot.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|r| r.user.clone())
    }

    /// Look up a user by id, failing if unknown.
    pub fn require(&self, id: Uuid) -> Result<User, DirectoryError> {
        self.get(id).ok_or(DirectoryError::UserNotFound)
    }

    /// Public profile for a user.
    pub fn profile(&self, id: Uuid) -> Result<UserProfile, DirectoryError> {
        self.require(id).map(UserProfile::from)
    }

    /// Look up a user and their password hash by email (case-insensitive).
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<(User, String)> {
        let id = *self.email_index.get(&email.trim().to_lowercase())?;
        self.users
            .get(&id)
            .map(|r| (r.user.clone(), r.password_hash.clone()))
    }

    /// All users in a sports category, optionally excluding one user.
    #[must_use]
    pub fn list_by_category(
        &self,
        category: SportsCategory,
        exclude: Option<Uuid>,
    ) -> Vec<UserProfile> {
        let mut users: Vec<UserProfile> = self
            .users
            .iter()
            .filter(|r| r.user.sports_category == category && Some(r.user.id) != exclude)
            .map(|r| UserProfile::from(r.user.clone()))
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// Record a follow edge. Returns `true` if the edge is new.
    ///
    /// Following an already-followed user is a no-op; counters only move
    /// on edge transitions.
    pub fn follow(&self, follower: Uuid, followee: Uuid) -> Result<bool, DirectoryError> {
        if follower == followee {
            return Err(DirectoryError::SelfFollow);
        }
        if !self.users.contains_key(&followee) {
            return Err(DirectoryError::UserNotFound);
        }

        let inserted = self
            .follows
            .write()
            .expect("follow set poisoned")
            .insert((follower, followee));

        if inserted {
            if let Some(mut r) = self.users.get_mut(&follower) {
                r.user.following += 1;
            }
            if let Some(mut r) = self.users.get_mut(&followee) {
                r.user.followers += 1;
            }
        }
        Ok(inserted)
    }

    /// Remove a follow edge. Returns `true` if an edge was removed.
    pub fn unfollow(&self, follower: Uuid, followee: Uuid) -> Result<bool, DirectoryError> {
        if !self.users.contains_key(&followee) {
            return Err(DirectoryError::UserNotFound);
        }

        let removed = self
            .follows
            .write()
            .expect("follow set poisoned")
            .remove(&(follower, followee));

        if removed {
            if let Some(mut r) = self.users.get_mut(&follower) {
                r.user.following = r.user.following.saturating_sub(1);
            }
            if let Some(mut r) = self.users.get_mut(&followee) {
                r.user.followers = r.user.followers.saturating_sub(1);
            }
        }
        Ok(removed)
    }

    /// Whether `follower` follows `followee`.
    #[must_use]
    pub fn is_following(&self, follower: Uuid, followee: Uuid) -> bool {
        self.follows
            .read()
            .expect("follow set poisoned")
            .contains(&(follower, followee))
    }

    /// Users following the given user.
    pub fn followers_of(&self, id: Uuid) -> Result<Vec<UserProfile>, DirectoryError> {
        self.require(id)?;
        let follows = self.follows.read().expect("follow set poisoned");
        let mut profiles: Vec<UserProfile> = follows
            .iter()
            .filter(|(_, followee)| *followee == id)
            .filter_map(|(follower, _)| self.profile(*follower).ok())
            .collect();
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }

    /// Users the given user follows.
    pub fn following_of(&self, id: Uuid) -> Result<Vec<UserProfile>, DirectoryError> {
        self.require(id)?;
        let follows = self.follows.read().expect("follow set poisoned");
        let mut profiles: Vec<UserProfile> = follows
            .iter()
            .filter(|(follower, _)| *follower == id)
            .filter_map(|(_, followee)| self.profile(*followee).ok())
            .collect();
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }

    /// Record a post into the user's shared set. Returns `true` if the
    /// post was not already in the set.
    pub fn add_shared_post(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, DirectoryError> {
        if !self.users.contains_key(&user_id) {
            return Err(DirectoryError::UserNotFound);
        }
        Ok(self
            .shared_posts
            .entry(user_id)
            .or_default()
            .insert(post_id))
    }

    /// Post ids the user has shared.
    #[must_use]
    pub fn shared_post_ids(&self, user_id: Uuid) -> HashSet<Uuid> {
        self.shared_posts
            .get(&user_id)
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Apply a partial profile edit, returning the updated record.
    ///
    /// Untouched fields keep their values. Other stores join through
    /// the directory on read, so edits show up in previously created
    /// posts and comments immediately.
    pub fn update_profile(
        &self,
        id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, DirectoryError> {
        let mut record = self.users.get_mut(&id).ok_or(DirectoryError::UserNotFound)?;
        if let Some(full_name) = update.full_name {
            record.user.full_name = full_name;
        }
        if let Some(bio) = update.bio {
            record.user.bio = Some(bio);
        }
        if let Some(avatar_url) = update.avatar_url {
            record.user.avatar_url = Some(avatar_url);
        }
        Ok(record.user.clone())
    }

    /// Increment the authored-posts counter.
    pub fn bump_post_count(&self, author_id: Uuid) {
        if let Some(mut r) = self.users.get_mut(&author_id) {
            r.user.posts += 1;
        }
    }

    /// Mark a user as verified.
    pub fn set_verified(&self, id: Uuid) -> Result<(), DirectoryError> {
        let mut record = self.users.get_mut(&id).ok_or(DirectoryError::UserNotFound)?;
        record.user.is_verified = true;
        Ok(())
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
