use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;

use marquee::router::init_router;
use marquee::state::AppState;
use marquee_auth::{AdminAccount, Role, StaticCredentialStore};
use marquee_config::{
    AccessConfig, AppConfig, CorsConfig, ObservabilityConfig, ServerConfig, SessionConfig,
    UnlistedPathPolicy,
};
use marquee_core::hash_password_with_cost;

#[allow(dead_code)]
pub const PASSWORD: &str = "correct-horse-battery";

#[allow(dead_code)]
pub struct TestAccount {
    pub id: i64,
    pub email: &'static str,
    pub role: Role,
}

pub const ADMIN: TestAccount = TestAccount {
    id: 1,
    email: "admin@example.com",
    role: Role::Admin,
};
pub const EDITOR: TestAccount = TestAccount {
    id: 42,
    email: "editor@example.com",
    role: Role::Editor,
};
pub const VIEWER: TestAccount = TestAccount {
    id: 7,
    email: "viewer@example.com",
    role: Role::Viewer,
};

pub fn test_config(policy: UnlistedPathPolicy) -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        session: SessionConfig {
            secret: "integration-test-secret".to_string(),
            ..SessionConfig::default()
        },
        access: AccessConfig::with_prefix("/api/admin", policy),
        cors: CorsConfig::from_list("http://localhost:5173"),
        observability: ObservabilityConfig::default(),
        accounts_file: None,
    }
}

pub fn test_state(policy: UnlistedPathPolicy) -> AppState {
    let accounts = [ADMIN, EDITOR, VIEWER]
        .into_iter()
        .map(|account| AdminAccount {
            id: account.id,
            email: account.email.to_string(),
            name: format!("Test {}", account.role),
            role: account.role,
            password_hash: hash_password_with_cost(PASSWORD, 4).unwrap(),
        })
        .collect();
    let store = StaticCredentialStore::new(accounts).unwrap();

    AppState::new(test_config(policy), Arc::new(store)).unwrap()
}

#[allow(dead_code)]
pub fn test_app() -> Router {
    init_router(test_state(UnlistedPathPolicy::AllowAll))
}

/// `Cookie` header value for a fresh session.
#[allow(dead_code)]
pub fn session_cookie(state: &AppState, id: i64, role: Role) -> String {
    let token = state.codec.encode(id, role).unwrap();
    format!("{}={}", state.codec.cookie_name(), token.value)
}

#[allow(dead_code)]
pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// All `Set-Cookie` headers on a response.
#[allow(dead_code)]
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}
