//! Integration tests for QuickBite.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! qb-cli migrate
//!
//! # Start the server
//! cargo run -p quickbite-server
//!
//! # Run integration tests
//! cargo test -p quickbite-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running server over HTTP; each test logs in through
//! the identity-assertion endpoint with a fresh random email, so runs
//! do not interfere with each other.
//!
//! Admin tests additionally need an admin account created via
//! `qb-cli admin create`, with its credentials exported as
//! `QUICKBITE_TEST_ADMIN_EMAIL` and `QUICKBITE_TEST_ADMIN_PASSWORD`.

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("QUICKBITE_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// A fresh cookie-holding client with no session.
#[must_use]
pub fn anonymous_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in a brand-new user via the identity-assertion endpoint.
///
/// Returns the client (now holding a session cookie) and the user's
/// email.
pub async fn logged_in_client() -> (Client, String) {
    let client = anonymous_client();
    let email = format!("test-{}@example.com", Uuid::new_v4());

    let resp = client
        .post(format!("{}/api/auth/google", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "picture": "https://example.com/avatar.png",
        }))
        .send()
        .await
        .expect("Failed to log in test user");
    assert!(
        resp.status().is_success(),
        "login failed: {}",
        resp.status()
    );

    (client, email)
}

/// Log in as the seeded test admin.
///
/// Reads `QUICKBITE_TEST_ADMIN_EMAIL` / `QUICKBITE_TEST_ADMIN_PASSWORD`.
pub async fn admin_client() -> Client {
    let email = std::env::var("QUICKBITE_TEST_ADMIN_EMAIL")
        .expect("QUICKBITE_TEST_ADMIN_EMAIL must be set for admin tests");
    let password = std::env::var("QUICKBITE_TEST_ADMIN_PASSWORD")
        .expect("QUICKBITE_TEST_ADMIN_PASSWORD must be set for admin tests");

    let client = anonymous_client();
    let resp = client
        .post(format!("{}/api/auth/admin", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to log in admin");
    assert!(
        resp.status().is_success(),
        "admin login failed: {}",
        resp.status()
    );

    client
}

/// A well-formed COD order request body.
#[must_use]
pub fn sample_order_body() -> Value {
    json!({
        "items": [
            { "id": "margherita", "name": "Margherita Pizza", "price": "12.50", "quantity": 2 }
        ],
        "address": {
            "street": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
            "country": "USA"
        },
        "paymentDetails": {
            "paymentMethod": "COD",
            "phoneNumber": "+1 555 0100"
        }
    })
}

/// Create an order with the given body, asserting 201, returning the JSON.
pub async fn create_order(client: &Client, body: &Value) -> Value {
    let resp = client
        .post(format!("{}/api/orders", base_url()))
        .json(body)
        .send()
        .await
        .expect("Failed to create order");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("Failed to parse order response")
}
