//! Authentication
//!
//! Mock identity provider: registration, login, and JWT-backed request
//! authentication against the in-memory user directory.

pub mod error;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use error::{AuthError, AuthResult};
pub use middleware::{require_auth, AuthUser};
