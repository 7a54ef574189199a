//! Notification Store

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use fc_common::UserProfile;

use super::types::{Notification, NotificationKind, NotifyError};

/// Append-only notification log.
///
/// Entries are prepended so iteration order is most-recent-first without
/// re-sorting on read. The only mutable state per entry is the read flag.
pub struct NotificationStore {
    entries: RwLock<Vec<Notification>>,
}

impl NotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Append a notification for `target_user_id`.
    pub fn notify(
        &self,
        target_user_id: Uuid,
        kind: NotificationKind,
        message: impl Into<String>,
        source_user: Option<UserProfile>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::now_v7(),
            target_user_id,
            kind,
            message: message.into(),
            is_read: false,
            source_user,
            created_at: Utc::now(),
        };
        self.entries
            .write()
            .expect("notification log poisoned")
            .insert(0, notification.clone());
        notification
    }

    /// Mark a notification as read.
    ///
    /// Idempotent: marking an already-read notification is a no-op, not
    /// an error. Unknown ids fail with `NotFound`.
    pub fn mark_read(&self, id: Uuid) -> Result<Notification, NotifyError> {
        let mut entries = self.entries.write().expect("notification log poisoned");
        let entry = entries
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotifyError::NotFound)?;
        entry.is_read = true;
        Ok(entry.clone())
    }

    /// Mark a notification as read, requiring it to belong to `user_id`.
    ///
    /// Other users' notifications are indistinguishable from unknown ids.
    pub fn mark_read_for(&self, id: Uuid, user_id: Uuid) -> Result<Notification, NotifyError> {
        let mut entries = self.entries.write().expect("notification log poisoned");
        let entry = entries
            .iter_mut()
            .find(|n| n.id == id && n.target_user_id == user_id)
            .ok_or(NotifyError::NotFound)?;
        entry.is_read = true;
        Ok(entry.clone())
    }

    /// All notifications for a user, most-recent-first.
    #[must_use]
    pub fn list_for(&self, user_id: Uuid) -> Vec<Notification> {
        self.entries
            .read()
            .expect("notification log poisoned")
            .iter()
            .filter(|n| n.target_user_id == user_id)
            .cloned()
            .collect()
    }

    /// Count of unread notifications for a user.
    #[must_use]
    pub fn unread_count(&self, user_id: Uuid) -> usize {
        self.entries
            .read()
            .expect("notification log poisoned")
            .iter()
            .filter(|n| n.target_user_id == user_id && !n.is_read)
            .count()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
