//! Friend graph integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chatgraph::backend::auth::users::get_user_by_id;

use crate::common::auth_helpers::seed_member;
use crate::common::{body_json, empty_request, json_request, send, test_app};

#[tokio::test]
async fn test_add_friend_then_add_again_is_idempotent() {
    let (app, pool, tokens) = test_app().await;
    let u1 = seed_member(&pool, &tokens, "u1@x.com").await;
    let u2 = seed_member(&pool, &tokens, "u2@x.com").await;

    let request = json!({ "email": "u2@x.com" });
    let response = send(
        &app,
        json_request("POST", "/api/friends", Some(&u1.token), &request),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["friends"], json!([u2.id.to_string()]));

    // Adding the same friend again leaves the list unchanged
    let response = send(
        &app,
        json_request("POST", "/api/friends", Some(&u1.token), &request),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["friends"], json!([u2.id.to_string()]));

    let stored = get_user_by_id(&pool, u1.id).await.unwrap().unwrap();
    assert_eq!(stored.friends, vec![u2.id]);
}

#[tokio::test]
async fn test_friendship_is_directed() {
    let (app, pool, tokens) = test_app().await;
    let u1 = seed_member(&pool, &tokens, "u1@x.com").await;
    let u2 = seed_member(&pool, &tokens, "u2@x.com").await;

    send(
        &app,
        json_request(
            "POST",
            "/api/friends",
            Some(&u1.token),
            &json!({ "email": "u2@x.com" }),
        ),
    )
    .await;

    // The target's own list is untouched
    let stored = get_user_by_id(&pool, u2.id).await.unwrap().unwrap();
    assert!(stored.friends.is_empty());
}

#[tokio::test]
async fn test_add_friend_unknown_email() {
    let (app, pool, tokens) = test_app().await;
    let u1 = seed_member(&pool, &tokens, "u1@x.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/friends",
            Some(&u1.token),
            &json!({ "email": "missing@x.com" }),
        ),
    )
    .await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "No users found for that email" }));

    let stored = get_user_by_id(&pool, u1.id).await.unwrap().unwrap();
    assert!(stored.friends.is_empty());
}

#[tokio::test]
async fn test_get_friends_resolves_records() {
    let (app, pool, tokens) = test_app().await;
    let u1 = seed_member(&pool, &tokens, "u1@x.com").await;
    seed_member(&pool, &tokens, "u2@x.com").await;
    seed_member(&pool, &tokens, "u3@x.com").await;

    for email in ["u2@x.com", "u3@x.com"] {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/friends",
                Some(&u1.token),
                &json!({ "email": email }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, empty_request("GET", "/api/friends", Some(&u1.token))).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|friend| friend["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["u2@x.com", "u3@x.com"]);
}

#[tokio::test]
async fn test_get_friends_requires_token() {
    let (app, _pool, _tokens) = test_app().await;

    let response = send(&app, empty_request("GET", "/api/friends", None)).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "msg": "No token provided" }));
}
