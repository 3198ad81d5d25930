//! Login and auth middleware integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::auth_helpers::seed_member;
use crate::common::{body_json, empty_request, json_request, send, test_app};

#[tokio::test]
async fn test_login_returns_token_and_token_authenticates() {
    let (app, pool, tokens) = test_app().await;
    let user = seed_member(&pool, &tokens, "u1@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            &json!({ "email": user.email, "password": user.password }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().expect("token is a string");
    assert!(!token.is_empty());

    // The returned token authenticates a protected request (raw header value)
    let response = send(&app, empty_request("GET", "/api/user", Some(token))).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "u1@x.com");
    assert_eq!(body["id"], user.id.to_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (app, pool, tokens) = test_app().await;
    let user = seed_member(&pool, &tokens, "u1@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            &json!({ "email": user.email, "password": "wrongpw" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Invalid credentials" }));
}

#[tokio::test]
async fn test_login_unknown_email_uses_same_message() {
    let (app, _pool, _tokens) = test_app().await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            &json!({ "email": "nobody@x.com", "password": "pw" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "msg": "Invalid credentials" }));
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _pool, _tokens) = test_app().await;

    let response = send(&app, empty_request("GET", "/api/user", None)).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "msg": "No token provided" }));
}

#[tokio::test]
async fn test_protected_route_with_tampered_token() {
    let (app, pool, tokens) = test_app().await;
    let user = seed_member(&pool, &tokens, "u1@x.com").await;

    // Flip one character of the payload segment; the signature no longer
    // matches the altered content
    let mut parts: Vec<String> = user.token.split('.').map(str::to_string).collect();
    let flipped = if parts[1].starts_with('A') { "B" } else { "A" };
    parts[1].replace_range(0..1, flipped);
    let tampered = parts.join(".");

    let response = send(&app, empty_request("GET", "/api/user", Some(&tampered))).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Invalid token");
    assert!(body["err"].is_string());
}

#[tokio::test]
async fn test_bearer_prefix_is_accepted() {
    let (app, pool, tokens) = test_app().await;
    let user = seed_member(&pool, &tokens, "u1@x.com").await;

    let bearer = format!("Bearer {}", user.token);
    let response = send(&app, empty_request("GET", "/api/user", Some(&bearer))).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "u1@x.com");
}

#[tokio::test]
async fn test_valid_token_for_missing_user_yields_null_user() {
    let (app, _pool, tokens) = test_app().await;

    // Token is properly signed but no such user row exists
    let token = tokens.mint(uuid::Uuid::new_v4()).expect("mint failed");

    let response = send(&app, empty_request("GET", "/api/user", Some(&token))).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_logout_is_a_stateless_no_op() {
    let (app, _pool, _tokens) = test_app().await;

    let response = send(&app, empty_request("POST", "/auth/logout", None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
