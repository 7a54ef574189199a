//! Social Graph & Content Store
//!
//! Owns posts and comments and derives per-viewer filtered views. User
//! data and the follow graph live in the injected [`UserDirectory`];
//! interaction notifications fan out through the injected
//! [`NotificationStore`].

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use fc_common::SportsCategory;

use super::types::{Comment, Post, PostMedia, SocialError};
use crate::directory::UserDirectory;
use crate::notify::{NotificationKind, NotificationStore};

/// Share behavior knobs, resolved from server configuration.
#[derive(Debug, Clone, Copy)]
pub struct ShareConfig {
    /// Whether repeated shares of the same post by the same user keep
    /// incrementing the counter. Defaults to true, the platform's
    /// historical behavior.
    pub allow_repeated: bool,
    /// Notification kind emitted to the author on a share. Historically
    /// `Comment`; set to `Share` for the corrected variant.
    pub notification_kind: NotificationKind,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            allow_repeated: true,
            notification_kind: NotificationKind::Comment,
        }
    }
}

/// Stored post. Like state is a per-viewer set; the wire representation
/// collapses it to a viewer-relative flag.
#[derive(Debug, Clone)]
struct PostRecord {
    id: Uuid,
    author_id: Uuid,
    content: String,
    media: Option<PostMedia>,
    likes: u64,
    comments: u64,
    shares: u64,
    liked_by: HashSet<Uuid>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRecord {
    id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct ContentState {
    /// Posts, most-recent insertion first.
    posts: Vec<PostRecord>,
    /// Comments in append order.
    comments: Vec<CommentRecord>,
}

/// In-memory content store.
pub struct ContentStore {
    directory: Arc<UserDirectory>,
    notifications: Arc<NotificationStore>,
    share: ShareConfig,
    inner: RwLock<ContentState>,
}

impl ContentStore {
    #[must_use]
    pub fn new(
        directory: Arc<UserDirectory>,
        notifications: Arc<NotificationStore>,
        share: ShareConfig,
    ) -> Self {
        Self {
            directory,
            notifications,
            share,
            inner: RwLock::new(ContentState::default()),
        }
    }

    fn post_view(&self, record: &PostRecord, viewer_id: Uuid) -> Result<Post, SocialError> {
        let author = self.directory.profile(record.author_id)?;
        Ok(Post {
            id: record.id,
            author,
            content: record.content.clone(),
            media: record.media.clone(),
            likes: record.likes,
            comments: record.comments,
            shares: record.shares,
            is_liked: record.liked_by.contains(&viewer_id),
            created_at: record.created_at,
        })
    }

    fn comment_view(&self, record: &CommentRecord) -> Result<Comment, SocialError> {
        let author = self.directory.profile(record.author_id)?;
        Ok(Comment {
            id: record.id,
            post_id: record.post_id,
            author,
            content: record.content.clone(),
            created_at: record.created_at,
        })
    }

    /// Create a post. Requires content or an attached media reference.
    ///
    /// New posts are prepended; recency at creation time is an
    /// insertion-order invariant, not a timestamp sort.
    pub fn create_post(
        &self,
        author_id: Uuid,
        content: &str,
        media: Option<PostMedia>,
    ) -> Result<Post, SocialError> {
        let content = content.trim();
        if content.is_empty() && media.is_none() {
            return Err(SocialError::Validation(
                "Post must have content or media".into(),
            ));
        }
        self.directory.require(author_id)?;

        let record = PostRecord {
            id: Uuid::now_v7(),
            author_id,
            content: content.to_string(),
            media,
            likes: 0,
            comments: 0,
            shares: 0,
            liked_by: HashSet::new(),
            created_at: Utc::now(),
        };

        // Bump before building the view so the embedded author profile
        // already counts this post.
        self.directory.bump_post_count(author_id);
        let view = self.post_view(&record, author_id)?;
        self.inner
            .write()
            .expect("content state poisoned")
            .posts
            .insert(0, record);
        Ok(view)
    }

    /// Set the viewer's like state on a post.
    ///
    /// The counter only moves on transitions, so setting an
    /// already-matching state is a no-op and toggling twice restores the
    /// original count. A false-to-true transition by someone other than
    /// the author notifies the author.
    pub fn set_like(
        &self,
        post_id: Uuid,
        viewer_id: Uuid,
        liked: bool,
    ) -> Result<Post, SocialError> {
        let viewer = self.directory.require(viewer_id)?;

        let (view, notify_author) = {
            let mut state = self.inner.write().expect("content state poisoned");
            let record = state
                .posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .ok_or(SocialError::PostNotFound)?;

            let was_liked = record.liked_by.contains(&viewer_id);
            let mut notify_author = None;
            if liked && !was_liked {
                record.liked_by.insert(viewer_id);
                record.likes += 1;
                if record.author_id != viewer_id {
                    notify_author = Some(record.author_id);
                }
            } else if !liked && was_liked {
                record.liked_by.remove(&viewer_id);
                record.likes = record.likes.saturating_sub(1);
            }
            (record.clone(), notify_author)
        };

        if let Some(author_id) = notify_author {
            self.notifications.notify(
                author_id,
                NotificationKind::Like,
                format!("{} liked your post", viewer.full_name),
                Some(viewer.into()),
            );
        }

        self.post_view(&view, viewer_id)
    }

    /// Share a post as the viewer.
    ///
    /// The post id is recorded into the viewer's shared set. Repeated
    /// shares keep incrementing the counter unless configured otherwise,
    /// in which case a repeat is a no-op. The author is notified with
    /// the configured kind.
    pub fn set_share(&self, post_id: Uuid, viewer_id: Uuid) -> Result<Post, SocialError> {
        let viewer = self.directory.require(viewer_id)?;

        {
            let state = self.inner.read().expect("content state poisoned");
            if !state.posts.iter().any(|p| p.id == post_id) {
                return Err(SocialError::PostNotFound);
            }
        }

        let newly_shared = self.directory.add_shared_post(viewer_id, post_id)?;
        if !newly_shared && !self.share.allow_repeated {
            let state = self.inner.read().expect("content state poisoned");
            let record = state
                .posts
                .iter()
                .find(|p| p.id == post_id)
                .ok_or(SocialError::PostNotFound)?;
            return self.post_view(record, viewer_id);
        }

        let (view, author_id) = {
            let mut state = self.inner.write().expect("content state poisoned");
            let record = state
                .posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .ok_or(SocialError::PostNotFound)?;
            record.shares += 1;
            (record.clone(), record.author_id)
        };

        self.notifications.notify(
            author_id,
            self.share.notification_kind,
            format!("{} shared your post", viewer.full_name),
            Some(viewer.into()),
        );

        self.post_view(&view, viewer_id)
    }

    /// Comment on a post.
    pub fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<Comment, SocialError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SocialError::Validation("Comment cannot be empty".into()));
        }
        let commenter = self.directory.require(author_id)?;

        let (record, post_author) = {
            let mut state = self.inner.write().expect("content state poisoned");
            let post = state
                .posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .ok_or(SocialError::PostNotFound)?;
            post.comments += 1;
            let post_author = post.author_id;

            let record = CommentRecord {
                id: Uuid::now_v7(),
                post_id,
                author_id,
                content: content.to_string(),
                created_at: Utc::now(),
            };
            state.comments.push(record.clone());
            (record, post_author)
        };

        if post_author != author_id {
            self.notifications.notify(
                post_author,
                NotificationKind::Comment,
                format!("{} commented on your post", commenter.full_name),
                Some(commenter.into()),
            );
        }

        self.comment_view(&record)
    }

    /// Category-scoped feed for a viewer.
    ///
    /// A full recompute on every call: posts whose author belongs to the
    /// category, ordered by `created_at` descending with insertion
    /// recency as the tie-break.
    pub fn get_feed(&self, viewer_id: Uuid, category: SportsCategory) -> Vec<Post> {
        let state = self.inner.read().expect("content state poisoned");
        let mut posts: Vec<(DateTime<Utc>, Post)> = state
            .posts
            .iter()
            .filter_map(|record| {
                let author = self.directory.get(record.author_id)?;
                (author.sports_category == category)
                    .then(|| self.post_view(record, viewer_id).ok())
                    .flatten()
                    .map(|p| (record.created_at, p))
            })
            .collect();
        // Stable sort over the newest-first vec keeps insertion order for ties.
        posts.sort_by(|a, b| b.0.cmp(&a.0));
        posts.into_iter().map(|(_, p)| p).collect()
    }

    /// Posts authored by a user, newest first.
    pub fn get_user_posts(&self, user_id: Uuid, viewer_id: Uuid) -> Result<Vec<Post>, SocialError> {
        self.directory.require(user_id)?;
        let state = self.inner.read().expect("content state poisoned");
        state
            .posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .map(|p| self.post_view(p, viewer_id))
            .collect()
    }

    /// Posts a user has shared, newest first.
    pub fn get_shared_posts(
        &self,
        user_id: Uuid,
        viewer_id: Uuid,
    ) -> Result<Vec<Post>, SocialError> {
        self.directory.require(user_id)?;
        let shared = self.directory.shared_post_ids(user_id);
        let state = self.inner.read().expect("content state poisoned");
        state
            .posts
            .iter()
            .filter(|p| shared.contains(&p.id))
            .map(|p| self.post_view(p, viewer_id))
            .collect()
    }

    /// Comments on a post, oldest first.
    pub fn get_post_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, SocialError> {
        let state = self.inner.read().expect("content state poisoned");
        if !state.posts.iter().any(|p| p.id == post_id) {
            return Err(SocialError::PostNotFound);
        }
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| self.comment_view(c))
            .collect::<Result<_, _>>()?;
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    /// A single post as seen by the viewer.
    pub fn get_post(&self, post_id: Uuid, viewer_id: Uuid) -> Result<Post, SocialError> {
        let state = self.inner.read().expect("content state poisoned");
        let record = state
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or(SocialError::PostNotFound)?;
        self.post_view(record, viewer_id)
    }
}
