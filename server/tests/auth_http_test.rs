//! Authentication integration tests.
//!
//! Registration, login, token-guarded routes, and role restrictions.
//!
//! Run with: `cargo test --test auth_http_test`

mod helpers;

use axum::http::{Method, StatusCode};
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn register_login_and_me_round_trip() {
    let app = TestApp::new();

    let (token, user) = app.register("alex_r", "user", "coco").await;
    assert_eq!(user["username"], "alex_r");
    assert_eq!(user["role"], "user");
    assert_eq!(user["sports_category"], "coco");
    assert_eq!(user["is_verified"], false);

    // Fresh login works with the same credentials.
    let (status, body) = app
        .send_json(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "alex_r@test.local", "password": "password123" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");

    // The token resolves to the same account.
    let (status, me) = app
        .send_json(Method::GET, "/auth/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user["id"]);
    assert_eq!(me["email"], "alex_r@test.local");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new();
    app.register("alex_r", "user", "coco").await;

    let (status, body) = app
        .send_json(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({
                "email": "ALEX_R@test.local",
                "password": "password123",
                "username": "someone_else",
                "full_name": "Someone Else",
                "role": "user",
                "sports_category": "coco",
            })),
        )
        .await;

    // Email uniqueness is case-insensitive.
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "USER_EXISTS");
}

#[tokio::test]
async fn expert_role_cannot_self_register() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({
                "email": "kim@test.local",
                "password": "password123",
                "username": "dr_kim",
                "full_name": "Dr. Kim",
                "role": "expert",
                "sports_category": "coco",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register("alex_r", "user", "coco").await;

    let (status, body) = app
        .send_json(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "alex_r@test.local", "password": "not-the-password" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::new();

    let (status, _) = app.send_json(Method::GET, "/api/feed", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send_json(Method::GET, "/api/feed", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_grants_a_token_wallet() {
    let app = TestApp::new();
    let (token, _) = app.register("alex_r", "user", "coco").await;

    let (status, wallet) = app
        .send_json(Method::GET, "/api/wallet", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wallet["balance"], 100);
    assert_eq!(wallet["total_spent"], 0);
}
