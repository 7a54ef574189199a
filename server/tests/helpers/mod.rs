//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the
//! full axum router, plus shortcuts for registering users and parsing
//! JSON bodies. State is in-memory, so every `TestApp` is isolated.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use fc_common::{SportsCategory, User, UserRole};
use fc_server::api::{create_router, AppState};
use fc_server::auth::password::hash_password;
use fc_server::config::Config;

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a test app with the default test configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default_for_test())
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let router = create_router(state.clone());
        Self { router, state }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// Send a JSON request, optionally authenticated, and return the
    /// status plus parsed body.
    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Self::request(method, uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = if let Some(body) = body {
            builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
        } else {
            builder.body(Body::empty())
        }
        .expect("failed to build request");

        let response = self.oneshot(request).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    /// Register a user through the API and return their access token
    /// and user JSON.
    pub async fn register(
        &self,
        username: &str,
        role: &str,
        category: &str,
    ) -> (String, Value) {
        let (status, body) = self
            .send_json(
                Method::POST,
                "/auth/register",
                None,
                Some(json!({
                    "email": format!("{username}@test.local"),
                    "password": "password123",
                    "username": username,
                    "full_name": username,
                    "role": role,
                    "sports_category": category,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");

        let token = body["access_token"]
            .as_str()
            .expect("missing access_token")
            .to_string();
        (token, body["user"].clone())
    }

    /// Insert an expert account directly into the directory (experts
    /// cannot self-register) and log them in.
    pub async fn seed_expert(&self, username: &str) -> (String, Uuid) {
        let user = User {
            id: Uuid::now_v7(),
            email: format!("{username}@test.local"),
            username: username.to_string(),
            full_name: username.to_string(),
            role: UserRole::Expert,
            sports_category: SportsCategory::Coco,
            is_verified: true,
            avatar_url: None,
            bio: None,
            followers: 0,
            following: 0,
            posts: 0,
            created_at: Utc::now(),
        };
        let id = user.id;
        let hash = hash_password("password123").expect("hashing failed");
        self.state
            .directory
            .insert(user, hash)
            .expect("seeding expert failed");

        let (status, body) = self
            .send_json(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({
                    "email": format!("{username}@test.local"),
                    "password": "password123",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "expert login failed: {body}");

        (body["access_token"].as_str().unwrap().to_string(), id)
    }
}

/// Read a response body as JSON. Empty bodies parse as `Value::Null`.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not valid JSON")
    }
}
