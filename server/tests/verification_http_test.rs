//! Verification integration tests.
//!
//! Document submission, expert review, and the resulting verified
//! badge plus notification.
//!
//! Run with: `cargo test --test verification_http_test`

mod helpers;

use axum::http::{Method, StatusCode};
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn approval_flow_verifies_the_coach() {
    let app = TestApp::new();
    let (coach, coach_user) = app.register("coach_sarah", "coach", "coco").await;
    let (expert, _) = app.seed_expert("dr_kim").await;
    let coach_id = coach_user["id"].as_str().unwrap();

    let (status, document) = app
        .send_json(
            Method::POST,
            "/api/verification/documents",
            Some(&coach),
            Some(json!({
                "file_name": "coaching-cert.pdf",
                "file_url": "https://files.test/coaching-cert.pdf",
                "document_type": "certificate",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(document["status"], "pending");
    let document_id = document["id"].as_str().unwrap();

    // The expert sees it in the pending queue.
    let (_, pending) = app
        .send_json(Method::GET, "/api/verification/pending", Some(&expert), None)
        .await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, reviewed) = app
        .send_json(
            Method::POST,
            &format!("/api/verification/documents/{document_id}/review"),
            Some(&expert),
            Some(json!({ "approve": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviewed["status"], "approved");

    // The coach is now verified and has a verification notification.
    let (_, profile) = app
        .send_json(
            Method::GET,
            &format!("/api/users/{coach_id}"),
            Some(&coach),
            None,
        )
        .await;
    assert_eq!(profile["is_verified"], true);

    let (_, notifications) = app
        .send_json(Method::GET, "/api/notifications", Some(&coach), None)
        .await;
    assert_eq!(notifications[0]["kind"], "verification");
}

#[tokio::test]
async fn non_experts_cannot_review_or_list_pending() {
    let app = TestApp::new();
    let (coach, _) = app.register("coach_sarah", "coach", "coco").await;

    let (_, document) = app
        .send_json(
            Method::POST,
            "/api/verification/documents",
            Some(&coach),
            Some(json!({
                "file_name": "id.png",
                "file_url": "https://files.test/id.png",
                "document_type": "id",
            })),
        )
        .await;
    let document_id = document["id"].as_str().unwrap();

    let (status, body) = app
        .send_json(Method::GET, "/api/verification/pending", Some(&coach), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "EXPERT_REQUIRED");

    let (status, _) = app
        .send_json(
            Method::POST,
            &format!("/api/verification/documents/{document_id}/review"),
            Some(&coach),
            Some(json!({ "approve": true })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn rejection_records_comments_without_verifying() {
    let app = TestApp::new();
    let (coach, coach_user) = app.register("coach_sarah", "coach", "coco").await;
    let (expert, _) = app.seed_expert("dr_kim").await;
    let coach_id = coach_user["id"].as_str().unwrap();

    let (_, document) = app
        .send_json(
            Method::POST,
            "/api/verification/documents",
            Some(&coach),
            Some(json!({
                "file_name": "license.pdf",
                "file_url": "https://files.test/license.pdf",
                "document_type": "license",
            })),
        )
        .await;
    let document_id = document["id"].as_str().unwrap();

    let (status, reviewed) = app
        .send_json(
            Method::POST,
            &format!("/api/verification/documents/{document_id}/review"),
            Some(&expert),
            Some(json!({ "approve": false, "comments": "Expired license" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviewed["status"], "rejected");
    assert_eq!(reviewed["comments"], "Expired license");

    let (_, profile) = app
        .send_json(
            Method::GET,
            &format!("/api/users/{coach_id}"),
            Some(&coach),
            None,
        )
        .await;
    assert_eq!(profile["is_verified"], false);

    // A second review of the same document is refused.
    let (status, body) = app
        .send_json(
            Method::POST,
            &format!("/api/verification/documents/{document_id}/review"),
            Some(&expert),
            Some(json!({ "approve": true })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ALREADY_REVIEWED");

    // The coach still sees their own document history.
    let (_, documents) = app
        .send_json(
            Method::GET,
            "/api/verification/documents",
            Some(&coach),
            None,
        )
        .await;
    assert_eq!(documents.as_array().unwrap().len(), 1);
    assert_eq!(documents[0]["status"], "rejected");
}
