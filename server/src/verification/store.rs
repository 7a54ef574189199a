//! Verification Store
//!
//! Holds submitted credential documents and applies expert review
//! decisions. Approving any document marks the submitting user as
//! verified and notifies them.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::notify::{NotificationKind, NotificationStore};

use super::types::{
    DocumentStatus, DocumentType, VerificationDocument, VerificationError,
};

/// In-memory store of verification documents.
pub struct VerificationStore {
    directory: Arc<UserDirectory>,
    notifications: Arc<NotificationStore>,
    documents: RwLock<Vec<VerificationDocument>>,
}

impl VerificationStore {
    pub fn new(directory: Arc<UserDirectory>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            directory,
            notifications,
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Submit a document for review. Newest submissions sort first.
    pub fn submit(
        &self,
        user_id: Uuid,
        file_name: &str,
        file_url: &str,
        document_type: DocumentType,
    ) -> Result<VerificationDocument, VerificationError> {
        self.directory.require(user_id)?;

        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(VerificationError::Validation(
                "File name cannot be empty".to_string(),
            ));
        }

        let document = VerificationDocument {
            id: Uuid::now_v7(),
            user_id,
            file_name: file_name.to_string(),
            file_url: file_url.to_string(),
            document_type,
            status: DocumentStatus::Pending,
            uploaded_at: Utc::now(),
            reviewed_at: None,
            reviewed_by: None,
            comments: None,
        };

        let mut documents = self.documents.write().expect("verification lock poisoned");
        documents.insert(0, document.clone());

        Ok(document)
    }

    /// All documents submitted by a user, newest first.
    pub fn list_for(&self, user_id: Uuid) -> Vec<VerificationDocument> {
        let documents = self.documents.read().expect("verification lock poisoned");
        documents
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect()
    }

    /// All documents still awaiting review, newest first.
    pub fn list_pending(&self) -> Vec<VerificationDocument> {
        let documents = self.documents.read().expect("verification lock poisoned");
        documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Pending)
            .cloned()
            .collect()
    }

    /// Apply a review decision. Approval marks the submitter verified
    /// and notifies them. Documents can only be reviewed once.
    pub fn review(
        &self,
        document_id: Uuid,
        reviewer_id: Uuid,
        approve: bool,
        comments: Option<String>,
    ) -> Result<VerificationDocument, VerificationError> {
        let submitter_id;
        let reviewed = {
            let mut documents = self.documents.write().expect("verification lock poisoned");
            let document = documents
                .iter_mut()
                .find(|d| d.id == document_id)
                .ok_or(VerificationError::DocumentNotFound)?;

            if document.status != DocumentStatus::Pending {
                return Err(VerificationError::AlreadyReviewed);
            }

            document.status = if approve {
                DocumentStatus::Approved
            } else {
                DocumentStatus::Rejected
            };
            document.reviewed_at = Some(Utc::now());
            document.reviewed_by = Some(reviewer_id);
            document.comments = comments;

            submitter_id = document.user_id;
            document.clone()
        };

        if approve {
            self.directory.set_verified(submitter_id)?;
            let reviewer = self.directory.profile(reviewer_id).ok();
            self.notifications.notify(
                submitter_id,
                NotificationKind::Verification,
                "Your account has been verified by an expert",
                reviewer,
            );
        }

        Ok(reviewed)
    }
}

#[cfg(test)]
mod tests {
    use fc_common::{SportsCategory, UserRole};

    use crate::testutil::{seed_user, test_directory};

    use super::*;

    fn store() -> (VerificationStore, Arc<UserDirectory>, Arc<NotificationStore>) {
        let directory = test_directory();
        let notifications = Arc::new(NotificationStore::new());
        let store = VerificationStore::new(directory.clone(), notifications.clone());
        (store, directory, notifications)
    }

    #[test]
    fn submit_starts_pending() {
        let (store, directory, _) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);

        let doc = store
            .submit(coach, "cert.pdf", "https://files.test/cert.pdf", DocumentType::Certificate)
            .unwrap();

        assert_eq!(doc.status, DocumentStatus::Pending);
        assert_eq!(store.list_pending().len(), 1);
        assert_eq!(store.list_for(coach).len(), 1);
    }

    #[test]
    fn approval_verifies_user_and_notifies() {
        let (store, directory, notifications) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let expert = seed_user(&directory, "expert", UserRole::Expert, SportsCategory::Coco);

        let doc = store
            .submit(coach, "cert.pdf", "https://files.test/cert.pdf", DocumentType::Certificate)
            .unwrap();
        let reviewed = store.review(doc.id, expert, true, None).unwrap();

        assert_eq!(reviewed.status, DocumentStatus::Approved);
        assert_eq!(reviewed.reviewed_by, Some(expert));
        assert!(directory.get(coach).unwrap().is_verified);
        assert_eq!(notifications.unread_count(coach), 1);
        let kinds: Vec<_> = notifications
            .list_for(coach)
            .into_iter()
            .map(|n| n.kind)
            .collect();
        assert_eq!(kinds, vec![NotificationKind::Verification]);
        assert!(store.list_pending().is_empty());
    }

    #[test]
    fn rejection_leaves_user_unverified() {
        let (store, directory, notifications) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let expert = seed_user(&directory, "expert", UserRole::Expert, SportsCategory::Coco);

        let doc = store
            .submit(coach, "id.png", "https://files.test/id.png", DocumentType::Id)
            .unwrap();
        let reviewed = store
            .review(doc.id, expert, false, Some("Blurry scan".to_string()))
            .unwrap();

        assert_eq!(reviewed.status, DocumentStatus::Rejected);
        assert_eq!(reviewed.comments.as_deref(), Some("Blurry scan"));
        assert!(!directory.get(coach).unwrap().is_verified);
        assert_eq!(notifications.unread_count(coach), 0);
    }

    #[test]
    fn documents_review_only_once() {
        let (store, directory, _) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let expert = seed_user(&directory, "expert", UserRole::Expert, SportsCategory::Coco);

        let doc = store
            .submit(coach, "lic.pdf", "https://files.test/lic.pdf", DocumentType::License)
            .unwrap();
        store.review(doc.id, expert, false, None).unwrap();

        assert!(matches!(
            store.review(doc.id, expert, true, None),
            Err(VerificationError::AlreadyReviewed)
        ));
    }
}
