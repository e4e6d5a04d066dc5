//! HTTP route handlers for the QuickBite API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health                          - Liveness check
//! GET   /health/ready                    - Readiness check (DB connectivity)
//!
//! # Auth
//! POST  /api/auth/google                 - Identity-assertion login (upsert by email)
//! POST  /api/auth/logout                 - Destroy session
//! POST  /api/auth/admin                  - Admin password login
//! POST  /api/auth/admin/logout           - Destroy session
//! GET   /api/auth/me                     - Current user profile
//!
//! # Orders (requires auth)
//! POST  /api/orders                      - Create order
//! GET   /api/orders                      - List own orders, newest first
//! GET   /api/orders/{id}                 - Get own order
//! PATCH /api/orders/{id}/cancel          - Cancel own order
//!
//! # Admin (requires admin role)
//! GET   /api/admin/users                 - List all users
//! GET   /api/admin/orders                - List all orders with owner identity
//! PATCH /api/admin/orders/{id}/status    - Overwrite order status
//! ```

pub mod admin;
pub mod auth;
pub mod orders;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/google", post(auth::google_login))
        .route("/logout", post(auth::logout))
        .route("/admin", post(auth::admin_login))
        .route("/admin/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::list_own))
        .route("/{id}", get(orders::show))
        .route("/{id}/cancel", patch(orders::cancel))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/orders", get(admin::list_orders))
        .route("/orders/{id}/status", patch(admin::update_status))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/admin", admin_routes())
}
