//! Expert Verification
//!
//! Coaches submit credential documents; experts review them. An
//! approved document marks the account verified.

pub mod handlers;
pub mod store;
pub mod types;

pub use store::VerificationStore;
pub use types::{DocumentStatus, DocumentType, VerificationDocument, VerificationError};

use axum::routing::{get, post};
use axum::Router;

use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/verification/documents",
            get(handlers::list_documents).post(handlers::submit_document),
        )
        .route("/api/verification/pending", get(handlers::list_pending))
        .route(
            "/api/verification/documents/{id}/review",
            post(handlers::review_document),
        )
}
