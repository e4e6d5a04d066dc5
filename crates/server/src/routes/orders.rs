//! Order routes (user-scoped).
//!
//! Thin translators over [`OrderService`]: extract identity, delegate,
//! map the result. No lifecycle rule lives here.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use quickbite_core::OrderId;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::Order;
use crate::services::OrderService;
use crate::services::orders::CreateOrderRequest;
use crate::state::AppState;

/// Create a new order.
///
/// POST /api/orders
///
/// # Errors
///
/// Returns 400 naming the first invalid field, 401 without a session.
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = OrderService::new(state.pool()).create(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List the caller's orders, newest first.
///
/// GET /api/orders
///
/// # Errors
///
/// Returns 401 without a session.
pub async fn list_own(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.pool()).list_own(user.id).await?;
    Ok(Json(orders))
}

/// Get one of the caller's orders.
///
/// GET /api/orders/{id}
///
/// # Errors
///
/// Returns 404 when the order is missing or owned by someone else.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    let order = OrderService::new(state.pool()).get(user.id, id).await?;
    Ok(Json(order))
}

/// Cancel one of the caller's orders.
///
/// PATCH /api/orders/{id}/cancel
///
/// # Errors
///
/// Returns 400 if already cancelled, 404 for missing or foreign orders.
pub async fn cancel(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    let order = OrderService::new(state.pool()).cancel(user.id, id).await?;
    Ok(Json(order))
}
