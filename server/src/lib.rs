//! `FitCircle` Server Library
//!
//! Backend for a fitness coaching community: a category-scoped feed,
//! follows, direct messages, notifications, expert verification, and a
//! token-funded training library.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod directory;
pub mod notify;
pub mod play;
pub mod seed;
pub mod social;
pub mod verification;

#[cfg(test)]
pub(crate) mod testutil;
