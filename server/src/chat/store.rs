//! Messaging Store
//!
//! Owns the direct-message log and derives conversations per query.
//! The derivation walks every message for every candidate participant;
//! with an in-memory log and no persistence that is acceptable, but a
//! backend with real volume would want a participant-pair index.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use fc_common::{SportsCategory, User};

use super::types::{ChatError, Conversation, Message, MessageKind};
use crate::directory::UserDirectory;
use crate::notify::{NotificationKind, NotificationStore};

/// In-memory messaging store.
pub struct MessagingStore {
    directory: Arc<UserDirectory>,
    notifications: Arc<NotificationStore>,
    /// Messages in append (send) order.
    messages: RwLock<Vec<Message>>,
}

impl MessagingStore {
    #[must_use]
    pub fn new(directory: Arc<UserDirectory>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            directory,
            notifications,
            messages: RwLock::new(Vec::new()),
        }
    }

    /// Send a direct message. Appends without deduplication and notifies
    /// the receiver.
    pub fn send_message(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: &str,
        kind: MessageKind,
    ) -> Result<Message, ChatError> {
        if sender_id == receiver_id {
            return Err(ChatError::Validation(
                "Cannot send a message to yourself".into(),
            ));
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::Validation("Message cannot be empty".into()));
        }
        let sender = self.directory.require(sender_id)?;
        self.directory.require(receiver_id)?;

        let message = Message {
            id: Uuid::now_v7(),
            sender_id,
            receiver_id,
            content: content.to_string(),
            kind,
            is_read: false,
            created_at: Utc::now(),
        };
        self.messages
            .write()
            .expect("message log poisoned")
            .push(message.clone());

        // The notification kind set predates messaging, so receiver
        // notifications reuse the comment kind.
        self.notifications.notify(
            receiver_id,
            NotificationKind::Comment,
            format!("{} sent you a message", sender.full_name),
            Some(sender.into()),
        );

        Ok(message)
    }

    /// Derive conversations for a viewer.
    ///
    /// One entry per other user in the category, ordered by last
    /// activity descending. Pairs without messages use the query time as
    /// `updated_at` and therefore sort to the top; that is a documented
    /// policy, not an accident.
    #[must_use]
    pub fn get_conversations(&self, viewer: &User, category: SportsCategory) -> Vec<Conversation> {
        let others = self.directory.list_by_category(category, Some(viewer.id));
        let messages = self.messages.read().expect("message log poisoned");

        let mut conversations: Vec<Conversation> = others
            .into_iter()
            .map(|other| {
                let mut last_message: Option<&Message> = None;
                let mut unread_count = 0u64;
                for msg in messages.iter().filter(|m| {
                    (m.sender_id == viewer.id && m.receiver_id == other.id)
                        || (m.sender_id == other.id && m.receiver_id == viewer.id)
                }) {
                    if last_message.is_none_or(|last| msg.created_at >= last.created_at) {
                        last_message = Some(msg);
                    }
                    if msg.receiver_id == viewer.id && !msg.is_read {
                        unread_count += 1;
                    }
                }

                let last_message = last_message.cloned();
                let updated_at = last_message
                    .as_ref()
                    .map_or_else(Utc::now, |m| m.created_at);
                Conversation {
                    id: format!("conv-{}-{}", viewer.id, other.id),
                    participant: other,
                    last_message,
                    unread_count,
                    updated_at,
                }
            })
            .collect();

        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations
    }

    /// Full thread between the viewer and another user, oldest first.
    ///
    /// Symmetric: both participants see the same sequence.
    pub fn get_thread(&self, viewer_id: Uuid, other_id: Uuid) -> Result<Vec<Message>, ChatError> {
        self.directory.require(other_id)?;
        let messages = self.messages.read().expect("message log poisoned");
        let mut thread: Vec<Message> = messages
            .iter()
            .filter(|m| {
                (m.sender_id == viewer_id && m.receiver_id == other_id)
                    || (m.sender_id == other_id && m.receiver_id == viewer_id)
            })
            .cloned()
            .collect();
        thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(thread)
    }

    /// Mark every message from `other_id` to the viewer as read.
    ///
    /// Returns the number of messages that transitioned.
    pub fn mark_thread_read(&self, viewer_id: Uuid, other_id: Uuid) -> Result<usize, ChatError> {
        self.directory.require(other_id)?;
        let mut messages = self.messages.write().expect("message log poisoned");
        let mut marked = 0;
        for msg in messages
            .iter_mut()
            .filter(|m| m.sender_id == other_id && m.receiver_id == viewer_id && !m.is_read)
        {
            msg.is_read = true;
            marked += 1;
        }
        Ok(marked)
    }
}
