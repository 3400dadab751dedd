//! Handler tests for the auth router: register, login, logout, and the
//! two middleware gates.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtAuth, TokenConfig};
use domain_users::{
    InMemoryUserRepository, UserService,
    auth_handlers::{AuthState, auth_router},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const TEST_SECRET: &str = "test-secret-that-is-long-enough-0123";

struct TestApp {
    app: Router,
    jwt: JwtAuth,
}

fn test_app() -> TestApp {
    let service = UserService::new(InMemoryUserRepository::new());
    let jwt = JwtAuth::new(&TokenConfig::new(TEST_SECRET));
    let app = auth_router(AuthState {
        service,
        jwt_auth: jwt.clone(),
    });

    TestApp { app, jwt }
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn john() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@x.com",
        "age": 30,
        "password": "123456",
    })
}

#[tokio::test]
async fn test_register_returns_201_with_verifiable_token() {
    let t = test_app();

    let response = t
        .app
        .oneshot(post_json("/register", None, john()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["email"], "john@x.com");
    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["user"]["age"], 30);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    // The issued token maps back to the created identity.
    let token = body["token"].as_str().unwrap();
    let claims = t.jwt.verify(token).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());
    assert_eq!(claims.email, "john@x.com");
}

#[tokio::test]
async fn test_register_empty_body_accumulates_errors() {
    let t = test_app();

    let response = t
        .app
        .oneshot(post_json("/register", None, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&json!("Validation error: 'name' field is required.")));
    assert!(errors.contains(&json!("Validation error: 'password' field is required.")));
}

#[tokio::test]
async fn test_register_numeric_name_and_bad_age() {
    let t = test_app();

    let response = t
        .app
        .oneshot(post_json(
            "/register",
            None,
            json!({
                "name": 42,
                "email": "john@x.com",
                "age": "thirty",
                "password": "123456",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Validation error: 'name' must be a string.")));
    assert!(errors.contains(&json!("Validation error: 'age' must be a number.")));
}

#[tokio::test]
async fn test_register_duplicate_email_is_validation_error() {
    let t = test_app();

    let response = t
        .app
        .clone()
        .oneshot(post_json("/register", None, john()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = t
        .app
        .oneshot(post_json(
            "/register",
            None,
            json!({
                "name": "Johnny Two",
                "email": "JOHN@X.COM",
                "age": 31,
                "password": "abcdef",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .contains(&json!("Validation error: A user with this email already exists.")));
}

#[tokio::test]
async fn test_register_blocked_for_authenticated_caller() {
    let t = test_app();
    let token = t.jwt.issue("some-user-id", "john@x.com").unwrap();

    let response = t
        .app
        .oneshot(post_json("/register", Some(&token), john()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Authenticated users cannot access this route.");
}

#[tokio::test]
async fn test_register_allows_garbage_token_through() {
    let t = test_app();

    // The gate fails open: a token that does not verify counts as
    // unauthenticated.
    let response = t
        .app
        .oneshot(post_json("/register", Some("garbage-token"), john()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_allows_expired_token_through() {
    let t = test_app();

    // Same secret, negative TTL: structurally valid but expired.
    let expired_issuer = JwtAuth::new(&TokenConfig::new(TEST_SECRET).with_ttl(-120));
    let expired = expired_issuer.issue("some-user-id", "old@x.com").unwrap();

    let response = t
        .app
        .oneshot(post_json("/register", Some(&expired), john()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_login_success() {
    let t = test_app();
    t.app
        .clone()
        .oneshot(post_json("/register", None, john()))
        .await
        .unwrap();

    let response = t
        .app
        .oneshot(post_json(
            "/login",
            None,
            json!({"email": "john@x.com", "password": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Login successful");
    assert!(t.jwt.verify(body["token"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let t = test_app();
    t.app
        .clone()
        .oneshot(post_json("/register", None, john()))
        .await
        .unwrap();

    let response = t
        .app
        .oneshot(post_json(
            "/login",
            None,
            json!({"email": "john@x.com", "password": "wrongpassword"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let t = test_app();

    let response = t
        .app
        .oneshot(post_json(
            "/login",
            None,
            json!({"email": "nobody@x.com", "password": "123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User not found with this email");
}

#[tokio::test]
async fn test_logout_without_token_is_401() {
    let t = test_app();

    let response = t
        .app
        .oneshot(post_json("/logout", None, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "No token provided");
}

#[tokio::test]
async fn test_logout_revokes_the_token() {
    let t = test_app();
    let register = t
        .app
        .clone()
        .oneshot(post_json("/register", None, john()))
        .await
        .unwrap();
    let body = json_body(register.into_body()).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = t
        .app
        .clone()
        .oneshot(post_json("/logout", Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Logout successful");
    assert!(t.jwt.is_revoked(&token).await);

    // Reusing the revoked token on a protected route is forbidden even
    // though the token is still cryptographically intact.
    let response = t
        .app
        .oneshot(post_json("/logout", Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Token has been blacklisted");
}
