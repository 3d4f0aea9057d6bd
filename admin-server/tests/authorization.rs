//! End-to-end authorization tests: login -> JWT principal -> gated routes
//! (in-memory SQLite, router driven through tower::ServiceExt::oneshot)

use admin_server::auth::JwtConfig;
use admin_server::core::{Config, ServerState};
use admin_server::db::seed::{self, SeedOptions};
use admin_server::db::DbService;
use admin_server::routes::build_app;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use shared::client::LoginResponse;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        work_dir: "./target/test-work".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-0123456789".to_string(),
            expiration_minutes: 60,
            issuer: "heron-admin".to_string(),
            audience: "heron-clients".to_string(),
        },
        environment: "test".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password: "adminpassword".to_string(),
        hr_email: "hr@example.com".to_string(),
        hr_password: "adminpassword".to_string(),
    }
}

async fn test_app() -> Router {
    let db = DbService::in_memory().await.expect("open in-memory db");
    seed::run(&db.pool, &SeedOptions::default())
        .await
        .expect("seed");
    let state = ServerState::new(test_config(), db.pool);
    build_app(&state).with_state(state)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

async fn login(app: &Router, email: &str, password: &str) -> LoginResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "email": email, "password": password }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.expect("login request");
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    body_json(response).await
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_require_authentication() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(get_with_token("/api/users", "not-a-jwt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_returns_resolved_principal() {
    let app = test_app().await;

    let hr = login(&app, "hr@example.com", "adminpassword").await;
    assert_eq!(hr.user.role_name, "EMPLOYEE");
    assert_eq!(
        hr.user.permissions,
        vec!["manage:employees".to_string(), "manage:reports".to_string()]
    );

    let admin = login(&app, "admin@example.com", "adminpassword").await;
    assert_eq!(admin.user.role_name, "ADMIN");
    assert_eq!(admin.user.permissions, vec!["admin:all".to_string()]);
}

#[tokio::test]
async fn login_failure_is_uniform() {
    let app = test_app().await;

    let bad_password = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "email": "admin@example.com", "password": "wrong" }).to_string(),
        ))
        .unwrap();
    let unknown_email = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "email": "ghost@example.com", "password": "wrong" }).to_string(),
        ))
        .unwrap();

    let first = app.clone().oneshot(bad_password).await.unwrap();
    let second = app.clone().oneshot(unknown_email).await.unwrap();

    // Same status, same body shape for both failure causes
    assert_eq!(first.status(), StatusCode::BAD_REQUEST);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let first: serde_json::Value = body_json(first).await;
    let second: serde_json::Value = body_json(second).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn employee_role_is_gated_by_permission_codes() {
    let app = test_app().await;
    let hr = login(&app, "hr@example.com", "adminpassword").await;

    // Granted: manage:employees, manage:reports
    let response = app
        .clone()
        .oneshot(get_with_token("/api/employees", &hr.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_with_token("/api/reports/summary", &hr.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Not granted: manage:users, manage:roles, manage:dashboards
    for uri in ["/api/users", "/api/roles", "/api/dashboard"] {
        let response = app
            .clone()
            .oneshot(get_with_token(uri, &hr.token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn sentinel_permission_bypasses_every_gate() {
    let app = test_app().await;
    let admin = login(&app, "admin@example.com", "adminpassword").await;

    for uri in [
        "/api/users",
        "/api/roles",
        "/api/permissions",
        "/api/departments",
        "/api/employees",
        "/api/references/nationality",
        "/api/reports/summary",
        "/api/dashboard",
    ] {
        let response = app
            .clone()
            .oneshot(get_with_token(uri, &admin.token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn me_reflects_current_principal() {
    let app = test_app().await;
    let hr = login(&app, "hr@example.com", "adminpassword").await;

    let response = app
        .clone()
        .oneshot(get_with_token("/api/auth/me", &hr.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let me: shared::client::UserInfo = body_json(response).await;
    assert_eq!(me.email, "hr@example.com");
    assert_eq!(me.role_name, "EMPLOYEE");
    assert!(me.is_active);
}

#[tokio::test]
async fn role_permission_management_round_trip() {
    let app = test_app().await;
    let admin = login(&app, "admin@example.com", "adminpassword").await;

    // Create a role granting only report access
    let request = Request::builder()
        .method("POST")
        .uri("/api/roles")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", admin.token))
        .body(Body::from(
            serde_json::json!({
                "name": "AUDITOR",
                "description": "Read-only report access",
                "permissions": ["manage:reports"]
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let role: shared::models::Role = body_json(response).await;

    let response = app
        .clone()
        .oneshot(get_with_token(
            &format!("/api/roles/{}/permissions", role.id),
            &admin.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let granted: shared::models::RolePermissions = body_json(response).await;
    assert_eq!(granted.permissions, vec!["manage:reports".to_string()]);

    // Unknown codes are rejected wholesale
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/roles/{}/permissions", role.id))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", admin.token))
        .body(Body::from(
            serde_json::json!(["manage:reports", "no:such_permission"]).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_reference_kind_is_rejected() {
    let app = test_app().await;
    let admin = login(&app, "admin@example.com", "adminpassword").await;

    let response = app
        .clone()
        .oneshot(get_with_token("/api/references/warehouse", &admin.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
