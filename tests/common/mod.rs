use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use gatehouse::gatehouse_auth::create_access_token;
use gatehouse::gatehouse_config::{CorsConfig, JwtConfig, ServerConfig};
use gatehouse::gatehouse_core::AppError;
use gatehouse::modules::users::directory::{InMemoryUserDirectory, UserDirectory};
use gatehouse::modules::users::model::{DeletionRequest, User};
use gatehouse::router::init_router;
use gatehouse::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Directory wrapper that records every deletion request it receives.
pub struct RecordingDirectory {
    inner: InMemoryUserDirectory,
    pub deletions: Mutex<Vec<DeletionRequest>>,
}

impl RecordingDirectory {
    pub fn seeded(usernames: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryUserDirectory::with_users(
                usernames.iter().map(|name| User::new(*name, false)),
            ),
            deletions: Mutex::new(Vec::new()),
        })
    }

    pub fn deletion_count(&self) -> usize {
        self.deletions.lock().unwrap().len()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.inner.contains(username).unwrap()
    }
}

impl UserDirectory for RecordingDirectory {
    fn list(&self) -> Result<Vec<User>, AppError> {
        self.inner.list()
    }

    fn delete(&self, request: &DeletionRequest) -> Result<User, AppError> {
        self.deletions.lock().unwrap().push(request.clone());
        self.inner.delete(request)
    }
}

pub fn setup_test_app(directory: Arc<RecordingDirectory>) -> axum::Router {
    let state = AppState {
        users: directory,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        server_config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            metrics_port: 0,
            seed_users: vec![],
        },
    };
    init_router(state)
}

pub fn token_for(subject: &str, is_admin: bool) -> String {
    create_access_token(subject, is_admin, &test_jwt_config()).unwrap()
}

/// Signs arbitrary claims, e.g. a token without an `is_admin` field.
pub fn token_from_claims(claims: &Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn delete_request(target: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", target));
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> (Response<Body>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, Body::empty()), json)
}
