//! Integration tests for the auth and session API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (qb-cli migrate)
//! - The server running (cargo run -p quickbite-server)
//!
//! Run with: cargo test -p quickbite-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use quickbite_integration_tests::{anonymous_client, base_url, logged_in_client};

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_identity_login_creates_session() {
    let (client, email) = logged_in_client().await;

    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to fetch profile");
    assert_eq!(resp.status(), StatusCode::OK);

    let me: Value = resp.json().await.expect("Failed to parse profile");
    assert_eq!(me["email"], email.as_str());
    assert_eq!(me["isAdmin"], false);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_identity_login_upserts_by_email() {
    let client = anonymous_client();
    let email = format!("upsert-{}@example.com", Uuid::new_v4());

    let first: Value = client
        .post(format!("{}/api/auth/google", base_url()))
        .json(&json!({ "name": "Before", "email": email }))
        .send()
        .await
        .expect("Failed to log in")
        .json()
        .await
        .expect("Failed to parse user");

    let second: Value = client
        .post(format!("{}/api/auth/google", base_url()))
        .json(&json!({ "name": "After", "email": email }))
        .send()
        .await
        .expect("Failed to log in again")
        .json()
        .await
        .expect("Failed to parse user");

    // Same account, refreshed display name
    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["name"], "After");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_identity_login_rejects_malformed_email() {
    let client = anonymous_client();

    let resp = client
        .post(format!("{}/api/auth/google", base_url()))
        .json(&json!({ "name": "Test", "email": "not-an-email" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_logout_destroys_session() {
    let (client, _) = logged_in_client().await;

    let resp = client
        .post(format!("{}/api/auth/logout", base_url()))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to fetch profile");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_me_requires_session() {
    let client = anonymous_client();

    let resp = client
        .get(format!("{}/api/auth/me", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_login_rejects_regular_account_password() {
    let client = anonymous_client();
    let email = format!("regular-{}@example.com", Uuid::new_v4());

    // Create a regular (passwordless) account first
    let resp = client
        .post(format!("{}/api/auth/google", base_url()))
        .json(&json!({ "name": "Regular", "email": email }))
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_success());

    // Password login against it must fail with a role error
    let resp = anonymous_client()
        .post(format!("{}/api/auth/admin", base_url()))
        .json(&json!({ "email": email, "password": "whatever-password" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running server, database, and seeded admin"]
async fn test_admin_login_wrong_password_unauthorized() {
    let email = std::env::var("QUICKBITE_TEST_ADMIN_EMAIL")
        .expect("QUICKBITE_TEST_ADMIN_EMAIL must be set for admin tests");

    let resp = anonymous_client()
        .post(format!("{}/api/auth/admin", base_url()))
        .json(&json!({ "email": email, "password": "definitely-wrong" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server, database, and seeded admin"]
async fn test_non_admin_listing_users_forbidden() {
    let (client, _) = logged_in_client().await;

    let resp = client
        .get(format!("{}/api/admin/users", base_url()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
