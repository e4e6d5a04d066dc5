//! Admin routes.
//!
//! All handlers take [`RequireAdmin`], so the role check precedes any
//! lookup or mutation; a non-admin caller learns nothing about the
//! targeted order, not even whether it exists.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use quickbite_core::{OrderId, OrderStatus};

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Order, OwnerSummary, UserResponse};
use crate::services::OrderService;
use crate::state::AppState;

/// An order with its owner's identity, as shown on the admin dashboard.
#[derive(Debug, Serialize)]
pub struct AdminOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Owner summary; the order's own `owner` field stays the bare ID.
    pub user: OwnerSummary,
}

/// List all users, newest first.
///
/// GET /api/admin/users
///
/// # Errors
///
/// Returns 403 for non-admin callers.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<UserResponse>>> {
    let users = crate::db::UserRepository::new(state.pool()).list_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// List all orders with owner identity, newest first.
///
/// GET /api/admin/orders
///
/// # Errors
///
/// Returns 403 for non-admin callers.
pub async fn list_orders(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<Vec<AdminOrder>>> {
    let orders = OrderService::new(state.pool()).admin_list_all().await?;
    Ok(Json(
        orders
            .into_iter()
            .map(|(order, user)| AdminOrder { order, user })
            .collect(),
    ))
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Minimal response contract for a status update.
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub id: OrderId,
    pub status: OrderStatus,
}

/// Overwrite an order's status.
///
/// PATCH /api/admin/orders/{id}/status
///
/// # Errors
///
/// Returns 400 for unenumerated statuses, 403 for non-admins, 404 for
/// missing orders.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<OrderId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>> {
    tracing::debug!(order_id = %id, status = %req.status, admin_id = %admin.id, "status update requested");

    let order = OrderService::new(state.pool())
        .admin_update_status(id, &req.status)
        .await?;

    Ok(Json(UpdateStatusResponse {
        id: order.id,
        status: order.status,
    }))
}
