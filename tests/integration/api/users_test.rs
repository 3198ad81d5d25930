//! Admin-gated user creation integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chatgraph::backend::auth::users::{get_user_by_email, Role};

use crate::common::auth_helpers::{seed_admin, seed_member};
use crate::common::{body_json, json_request, send, test_app};

#[tokio::test]
async fn test_admin_creates_member_account() {
    let (app, pool, tokens) = test_app().await;
    let admin = seed_admin(&pool, &tokens, "admin@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/user",
            Some(&admin.token),
            &json!({ "email": "u1@x.com", "password": "pw1", "username": "u1" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "u1@x.com");
    assert_eq!(body["username"], "u1");
    assert_eq!(body["friends"], json!([]));

    // No password material in the response
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // The stored record is a plain member
    let stored = get_user_by_email(&pool, "u1@x.com").await.unwrap().unwrap();
    assert_eq!(stored.roles, vec![Role::Member]);
}

#[tokio::test]
async fn test_non_admin_cannot_create_accounts() {
    let (app, pool, tokens) = test_app().await;
    let member = seed_member(&pool, &tokens, "member@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/user",
            Some(&member.token),
            &json!({ "email": "u1@x.com", "password": "pw1" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({ "msg": "You are not allowed to execute this action" })
    );

    // No record was produced
    assert!(get_user_by_email(&pool, "u1@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let (app, pool, tokens) = test_app().await;
    let admin = seed_admin(&pool, &tokens, "admin@x.com").await;

    let request = json!({ "email": "u1@x.com", "password": "pw1" });
    let response = send(
        &app,
        json_request("POST", "/api/user", Some(&admin.token), &request),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        json_request("POST", "/api/user", Some(&admin.token), &request),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "msg": "Email address already in use" }));
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let (app, pool, tokens) = test_app().await;
    let admin = seed_admin(&pool, &tokens, "admin@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/user",
            Some(&admin.token),
            &json!({ "email": "not-an-email", "password": "pw1" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["msg"].as_str().unwrap().contains("not a valid email"));
}

#[tokio::test]
async fn test_creation_requires_authentication() {
    let (app, _pool, _tokens) = test_app().await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/user",
            None,
            &json!({ "email": "u1@x.com", "password": "pw1" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "msg": "No token provided" }));
}
