mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use marquee::router::init_router;
use marquee_auth::Role;
use marquee_config::UnlistedPathPolicy;

use common::{
    EDITOR, PASSWORD, get_request, json_body, post_json, session_cookie, set_cookies, test_app,
    test_state,
};

/// `name=value` part of a `Set-Cookie` header.
fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap_or_default()
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": EDITOR.email, "password": PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(cookie.starts_with("admin-session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let body = json_body(response).await;
    assert_eq!(body["user"]["id"], 42);
    assert_eq!(body["user"]["email"], EDITOR.email);
    assert_eq!(body["user"]["role"], "editor");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": "Editor@Example.com", "password": PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": EDITOR.email, "password": "wrong-password" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());
    let body = json_body(response).await;
    assert_eq!(body, json!({ "error": "Invalid email or password" }));
}

#[tokio::test]
async fn test_login_invalid_email_is_unprocessable() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": "not-an-email", "password": PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "email must be a valid email address");
}

#[tokio::test]
async fn test_login_empty_password_is_unprocessable() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": EDITOR.email, "password": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_missing_field_is_bad_request() {
    let response = test_app()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": EDITOR.email }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_login_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_cookie_opens_session_endpoint() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/admin/auth/login",
            json!({ "email": EDITOR.email, "password": PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    let cookie = cookie_pair(&cookies[0]).to_string();

    let response = app
        .oneshot(get_request("/api/admin/auth/session", Some(cookie.as_str())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["subject_id"], 42);
    assert_eq!(body["role"], "editor");
    assert!(body["issued_at"].is_string());
    assert!(body["expires_at"].is_string());
}

#[tokio::test]
async fn test_session_endpoint_open_to_viewers() {
    let state = test_state(UnlistedPathPolicy::DenyAll);
    let cookie = session_cookie(&state, 7, Role::Viewer);

    let response = init_router(state)
        .oneshot(get_request("/api/admin/auth/session", Some(cookie.as_str())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["role"], "viewer");
}

#[tokio::test]
async fn test_session_endpoint_requires_cookie() {
    let response = test_app()
        .oneshot(get_request("/api/admin/auth/session", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let state = test_state(UnlistedPathPolicy::AllowAll);
    let cookie = session_cookie(&state, 42, Role::Editor);

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/logout")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();

    let response = init_router(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("admin-session=;"));
    assert!(cookies[0].contains("Max-Age=0"));

    let body = json_body(response).await;
    assert_eq!(body, json!({ "message": "Logged out" }));
}

#[tokio::test]
async fn test_logout_without_session() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/auth/logout")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookies(&response).len(), 1);
}
