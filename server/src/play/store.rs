//! Play Store
//!
//! Token wallets, the video catalogue, and membership programmes.
//! Every account gets a wallet with a signup grant; watching a premium
//! video moves tokens from the viewer's wallet to the coach's.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use fc_common::UserRole;

use crate::directory::UserDirectory;

use super::types::{
    Membership, PlayError, TokenWallet, Video, VideoFilter, VideoKind,
};

struct WalletRecord {
    balance: u64,
    total_earned: u64,
    total_spent: u64,
}

struct VideoRecord {
    video: Video,
    unlocked_by: HashSet<Uuid>,
}

struct MembershipRecord {
    membership: Membership,
    members: HashSet<Uuid>,
}

/// In-memory store behind the play surface.
pub struct PlayStore {
    directory: Arc<UserDirectory>,
    signup_grant: u64,
    wallets: DashMap<Uuid, WalletRecord>,
    videos: RwLock<Vec<VideoRecord>>,
    memberships: RwLock<Vec<MembershipRecord>>,
}

impl PlayStore {
    pub fn new(directory: Arc<UserDirectory>, signup_grant: u64) -> Self {
        Self {
            directory,
            signup_grant,
            wallets: DashMap::new(),
            videos: RwLock::new(Vec::new()),
            memberships: RwLock::new(Vec::new()),
        }
    }

    /// Create the user's wallet with the signup grant if it does not
    /// exist yet. Idempotent.
    pub fn ensure_wallet(&self, user_id: Uuid) {
        self.wallets.entry(user_id).or_insert_with(|| WalletRecord {
            balance: self.signup_grant,
            total_earned: 0,
            total_spent: 0,
        });
    }

    /// Current wallet for a user, creating it if missing.
    pub fn wallet(&self, user_id: Uuid) -> TokenWallet {
        self.ensure_wallet(user_id);
        let record = self.wallets.get(&user_id).expect("wallet just ensured");
        TokenWallet {
            user_id,
            balance: record.balance,
            total_earned: record.total_earned,
            total_spent: record.total_spent,
        }
    }

    /// Publish a training video. Coaches only; premium videos must
    /// carry a non-zero price and free videos must not.
    pub fn upload_video(
        &self,
        coach_id: Uuid,
        title: &str,
        description: &str,
        kind: VideoKind,
        price: u64,
        duration: u64,
    ) -> Result<Video, PlayError> {
        let coach = self.directory.require(coach_id)?;
        if coach.role != UserRole::Coach {
            return Err(PlayError::CoachRequired);
        }

        match kind {
            VideoKind::Premium if price == 0 => {
                return Err(PlayError::Validation(
                    "Premium videos need a price".to_string(),
                ));
            }
            VideoKind::Free if price != 0 => {
                return Err(PlayError::Validation(
                    "Free videos cannot have a price".to_string(),
                ));
            }
            _ => {}
        }

        let video = Video {
            id: Uuid::now_v7(),
            coach_id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category: coach.sports_category,
            kind,
            price,
            duration,
            views: 0,
            created_at: Utc::now(),
        };

        let mut videos = self.videos.write().expect("play lock poisoned");
        videos.insert(
            0,
            VideoRecord {
                video: video.clone(),
                unlocked_by: HashSet::new(),
            },
        );

        Ok(video)
    }

    /// Video catalogue, newest first, optionally filtered.
    pub fn list_videos(&self, filter: &VideoFilter) -> Vec<Video> {
        let videos = self.videos.read().expect("play lock poisoned");
        videos
            .iter()
            .filter(|r| filter.category.is_none_or(|c| r.video.category == c))
            .filter(|r| filter.kind.is_none_or(|k| r.video.kind == k))
            .map(|r| r.video.clone())
            .collect()
    }

    /// Unlock a video for a viewer. Free videos and repeat unlocks are
    /// no-ops; the first premium unlock moves the price from the
    /// viewer's wallet to the coach's and counts a view.
    pub fn unlock_video(&self, video_id: Uuid, viewer_id: Uuid) -> Result<Video, PlayError> {
        self.directory.require(viewer_id)?;
        self.ensure_wallet(viewer_id);

        let mut videos = self.videos.write().expect("play lock poisoned");
        let record = videos
            .iter_mut()
            .find(|r| r.video.id == video_id)
            .ok_or(PlayError::VideoNotFound)?;

        if record.unlocked_by.contains(&viewer_id) {
            return Ok(record.video.clone());
        }

        if record.video.kind == VideoKind::Premium && viewer_id != record.video.coach_id {
            let price = record.video.price;
            {
                let mut wallet = self
                    .wallets
                    .get_mut(&viewer_id)
                    .expect("wallet just ensured");
                if wallet.balance < price {
                    return Err(PlayError::InsufficientTokens);
                }
                wallet.balance -= price;
                wallet.total_spent += price;
            }

            self.ensure_wallet(record.video.coach_id);
            let mut coach_wallet = self
                .wallets
                .get_mut(&record.video.coach_id)
                .expect("wallet just ensured");
            coach_wallet.balance += price;
            coach_wallet.total_earned += price;
        }

        record.unlocked_by.insert(viewer_id);
        record.video.views += 1;
        Ok(record.video.clone())
    }

    /// Create a membership programme. Coaches only.
    pub fn create_membership(
        &self,
        coach_id: Uuid,
        name: &str,
        description: &str,
        price: u64,
    ) -> Result<Membership, PlayError> {
        let coach = self.directory.require(coach_id)?;
        if coach.role != UserRole::Coach {
            return Err(PlayError::CoachRequired);
        }

        let membership = Membership {
            id: Uuid::now_v7(),
            coach_id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price,
            member_count: 0,
            created_at: Utc::now(),
        };

        let mut memberships = self.memberships.write().expect("play lock poisoned");
        memberships.insert(
            0,
            MembershipRecord {
                membership: membership.clone(),
                members: HashSet::new(),
            },
        );

        Ok(membership)
    }

    /// All programmes, newest first.
    pub fn list_memberships(&self) -> Vec<Membership> {
        let memberships = self.memberships.read().expect("play lock poisoned");
        memberships.iter().map(|r| r.membership.clone()).collect()
    }

    /// Join a programme, paying the first month up front. Tokens move
    /// from the joiner's wallet to the coach's.
    pub fn join_membership(
        &self,
        membership_id: Uuid,
        user_id: Uuid,
    ) -> Result<Membership, PlayError> {
        self.directory.require(user_id)?;
        self.ensure_wallet(user_id);

        let mut memberships = self.memberships.write().expect("play lock poisoned");
        let record = memberships
            .iter_mut()
            .find(|r| r.membership.id == membership_id)
            .ok_or(PlayError::MembershipNotFound)?;

        if record.members.contains(&user_id) {
            return Err(PlayError::AlreadyMember);
        }
        if user_id == record.membership.coach_id {
            return Err(PlayError::Validation(
                "Coaches cannot join their own programme".to_string(),
            ));
        }

        let price = record.membership.price;
        {
            let mut wallet = self.wallets.get_mut(&user_id).expect("wallet just ensured");
            if wallet.balance < price {
                return Err(PlayError::InsufficientTokens);
            }
            wallet.balance -= price;
            wallet.total_spent += price;
        }

        self.ensure_wallet(record.membership.coach_id);
        let mut coach_wallet = self
            .wallets
            .get_mut(&record.membership.coach_id)
            .expect("wallet just ensured");
        coach_wallet.balance += price;
        coach_wallet.total_earned += price;
        drop(coach_wallet);

        record.members.insert(user_id);
        record.membership.member_count += 1;
        Ok(record.membership.clone())
    }
}

#[cfg(test)]
mod tests {
    use fc_common::SportsCategory;

    use crate::testutil::{seed_user, test_directory};

    use super::*;

    fn store() -> (PlayStore, Arc<UserDirectory>) {
        let directory = test_directory();
        let store = PlayStore::new(directory.clone(), 100);
        (store, directory)
    }

    #[test]
    fn wallets_start_with_signup_grant() {
        let (store, directory) = store();
        let user = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        let wallet = store.wallet(user);
        assert_eq!(wallet.balance, 100);
        assert_eq!(wallet.total_spent, 0);

        // Repeat calls never re-grant.
        store.ensure_wallet(user);
        assert_eq!(store.wallet(user).balance, 100);
    }

    #[test]
    fn only_coaches_upload_videos() {
        let (store, directory) = store();
        let user = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        assert!(matches!(
            store.upload_video(user, "Warmup", "", VideoKind::Free, 0, 300),
            Err(PlayError::CoachRequired)
        ));
    }

    #[test]
    fn premium_unlock_moves_tokens_once() {
        let (store, directory) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let viewer = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        let video = store
            .upload_video(coach, "Footwork", "Drills", VideoKind::Premium, 30, 600)
            .unwrap();

        let unlocked = store.unlock_video(video.id, viewer).unwrap();
        assert_eq!(unlocked.views, 1);
        assert_eq!(store.wallet(viewer).balance, 70);
        assert_eq!(store.wallet(viewer).total_spent, 30);
        assert_eq!(store.wallet(coach).balance, 130);
        assert_eq!(store.wallet(coach).total_earned, 30);

        // Second unlock is free and does not count a view.
        let again = store.unlock_video(video.id, viewer).unwrap();
        assert_eq!(again.views, 1);
        assert_eq!(store.wallet(viewer).balance, 70);
    }

    #[test]
    fn unlock_fails_on_insufficient_balance() {
        let (store, directory) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let viewer = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        let video = store
            .upload_video(coach, "Masterclass", "", VideoKind::Premium, 500, 3600)
            .unwrap();

        assert!(matches!(
            store.unlock_video(video.id, viewer),
            Err(PlayError::InsufficientTokens)
        ));
        assert_eq!(store.wallet(viewer).balance, 100);
    }

    #[test]
    fn free_videos_unlock_without_payment() {
        let (store, directory) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let viewer = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        let video = store
            .upload_video(coach, "Intro", "", VideoKind::Free, 0, 120)
            .unwrap();
        let unlocked = store.unlock_video(video.id, viewer).unwrap();

        assert_eq!(unlocked.views, 1);
        assert_eq!(store.wallet(viewer).balance, 100);
    }

    #[test]
    fn video_filter_by_category_and_kind() {
        let (store, directory) = store();
        let coco_coach = seed_user(&directory, "coco", UserRole::Coach, SportsCategory::Coco);
        let mma_coach = seed_user(
            &directory,
            "mma",
            UserRole::Coach,
            SportsCategory::MartialArts,
        );

        store
            .upload_video(coco_coach, "A", "", VideoKind::Free, 0, 60)
            .unwrap();
        store
            .upload_video(mma_coach, "B", "", VideoKind::Premium, 10, 60)
            .unwrap();

        let all = store.list_videos(&VideoFilter::default());
        assert_eq!(all.len(), 2);

        let coco_only = store.list_videos(&VideoFilter {
            category: Some(SportsCategory::Coco),
            kind: None,
        });
        assert_eq!(coco_only.len(), 1);
        assert_eq!(coco_only[0].title, "A");

        let premium_only = store.list_videos(&VideoFilter {
            category: None,
            kind: Some(VideoKind::Premium),
        });
        assert_eq!(premium_only.len(), 1);
        assert_eq!(premium_only[0].title, "B");
    }

    #[test]
    fn joining_a_membership_charges_and_counts() {
        let (store, directory) = store();
        let coach = seed_user(&directory, "coach", UserRole::Coach, SportsCategory::Coco);
        let user = seed_user(&directory, "alex", UserRole::User, SportsCategory::Coco);

        let membership = store
            .create_membership(coach, "Monthly drills", "", 40)
            .unwrap();
        let joined = store.join_membership(membership.id, user).unwrap();

        assert_eq!(joined.member_count, 1);
        assert_eq!(store.wallet(user).balance, 60);
        assert_eq!(store.wallet(coach).total_earned, 40);

        assert!(matches!(
            store.join_membership(membership.id, user),
            Err(PlayError::AlreadyMember)
        ));
    }
}
