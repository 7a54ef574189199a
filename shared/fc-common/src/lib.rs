//! `FitCircle` Common Library
//!
//! Shared identity types used across the platform crates.

pub mod types;

pub use types::*;
