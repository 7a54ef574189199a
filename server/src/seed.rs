//! Demo Data Seeding
//!
//! Populates the stores with demo coaches, athletes, an expert, and a
//! few posts so a fresh install has something to show.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use fc_common::{SportsCategory, User, UserRole};

use crate::api::AppState;
use crate::auth::password::hash_password;
use crate::notify::NotificationKind;

struct DemoAccount {
    email: &'static str,
    username: &'static str,
    full_name: &'static str,
    role: UserRole,
    category: SportsCategory,
    bio: &'static str,
    verified: bool,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "sarah@fitcircle.demo",
        username: "coach_sarah",
        full_name: "Sarah Chen",
        role: UserRole::Coach,
        category: SportsCategory::Coco,
        bio: "Coco conditioning coach. Ten years on the mat.",
        verified: true,
    },
    DemoAccount {
        email: "mike@fitcircle.demo",
        username: "coach_mike",
        full_name: "Mike Torres",
        role: UserRole::Coach,
        category: SportsCategory::MartialArts,
        bio: "Striking and grappling fundamentals.",
        verified: true,
    },
    DemoAccount {
        email: "emma@fitcircle.demo",
        username: "coach_emma",
        full_name: "Emma Lindqvist",
        role: UserRole::Coach,
        category: SportsCategory::CalorieFight,
        bio: "Calorie fight programming and nutrition.",
        verified: false,
    },
    DemoAccount {
        email: "alex@fitcircle.demo",
        username: "alex_r",
        full_name: "Alex Rivera",
        role: UserRole::User,
        category: SportsCategory::Coco,
        bio: "Training for my first coco season.",
        verified: false,
    },
    DemoAccount {
        email: "jordan@fitcircle.demo",
        username: "jordan_k",
        full_name: "Jordan Kim",
        role: UserRole::User,
        category: SportsCategory::MartialArts,
        bio: "Blue belt, always rolling.",
        verified: false,
    },
    DemoAccount {
        email: "sam@fitcircle.demo",
        username: "sam_p",
        full_name: "Sam Patel",
        role: UserRole::User,
        category: SportsCategory::CalorieFight,
        bio: "Down 8kg and counting.",
        verified: false,
    },
    DemoAccount {
        email: "kim@fitcircle.demo",
        username: "dr_kim",
        full_name: "Dr. Hana Kim",
        role: UserRole::Expert,
        category: SportsCategory::Coco,
        bio: "Sports science PhD. Reviewing coach credentials.",
        verified: true,
    },
];

/// Seed demo accounts, a starter feed, and a few notifications.
/// All demo accounts share the configured demo password.
pub fn seed_demo_data(state: &AppState) -> Result<()> {
    let password_hash = hash_password(&state.config.demo_password)?;

    let mut ids: Vec<Uuid> = Vec::with_capacity(DEMO_ACCOUNTS.len());
    for account in DEMO_ACCOUNTS {
        let user = User {
            id: Uuid::now_v7(),
            email: account.email.to_string(),
            username: account.username.to_string(),
            full_name: account.full_name.to_string(),
            role: account.role,
            sports_category: account.category,
            is_verified: account.verified,
            avatar_url: None,
            bio: Some(account.bio.to_string()),
            followers: 0,
            following: 0,
            posts: 0,
            created_at: Utc::now(),
        };
        let id = user.id;
        state.directory.insert(user, password_hash.clone())?;
        state.play.ensure_wallet(id);
        ids.push(id);
    }

    let [sarah, mike, emma, alex, jordan, sam, _dr_kim] = ids[..] else {
        unreachable!("demo account list has seven entries");
    };

    // Athletes follow the coach in their category.
    for (follower, coach) in [(alex, sarah), (jordan, mike), (sam, emma)] {
        state.directory.follow(follower, coach)?;
        let profile = state.directory.profile(follower)?;
        let message = format!("{} started following you", profile.full_name);
        state
            .notifications
            .notify(coach, NotificationKind::Follow, message, Some(profile));
    }

    // One starter post per category.
    state.content.create_post(
        sarah,
        "Morning coco drills: 3 rounds of footwork ladders before breakfast. Who's in?",
        None,
    )?;
    state.content.create_post(
        mike,
        "New week, new combos. Today we chain the jab-cross into a level change.",
        None,
    )?;
    state.content.create_post(
        emma,
        "Calorie fight leaderboard resets tonight. Log your meals before midnight!",
        None,
    )?;

    info!(accounts = DEMO_ACCOUNTS.len(), "demo data seeded");

    Ok(())
}
