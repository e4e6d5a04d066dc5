//! Order repository for database operations.
//!
//! Ownership scoping lives in the queries themselves: the user-facing
//! lookups filter by owner, so a missing order and someone else's order
//! are indistinguishable to callers.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use quickbite_core::{Email, OrderId, OrderStatus, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem, OwnerSummary, PaymentDetails, ShippingAddress};

/// Fields of a new order, computed and validated by the lifecycle core.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub address: ShippingAddress,
    pub payment_details: PaymentDetails,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Raw `orders` row before domain validation.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    user_id: i32,
    items: Json<Vec<OrderItem>>,
    address: Json<ShippingAddress>,
    payment_details: Json<PaymentDetails>,
    subtotal: Decimal,
    shipping: Decimal,
    tax: Decimal,
    total: Decimal,
    status: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepositoryError> {
        // The CHECK constraint makes this unreachable short of manual edits
        let status = OrderStatus::from_str(&self.status).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid status in database: {e}"))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            items: self.items.0,
            address: self.address.0,
            payment_details: self.payment_details.0,
            subtotal: self.subtotal,
            shipping: self.shipping,
            tax: self.tax,
            total: self.total,
            status,
            created_at: self.created_at,
        })
    }
}

const ORDER_COLUMNS: &str =
    "id, user_id, items, address, payment_details, subtotal, shipping, tax, total, status, created_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order with initial status `Pending`.
    ///
    /// A single atomic insert: if it fails, no partial order exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, owner: UserId, new: NewOrder) -> Result<Order, RepositoryError> {
        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders
                 (user_id, items, address, payment_details, subtotal, shipping, tax, total)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(owner.as_i32())
        .bind(Json(new.items))
        .bind(Json(new.address))
        .bind(Json(new.payment_details))
        .bind(new.subtotal)
        .bind(new.shipping)
        .bind(new.tax)
        .bind(new.total)
        .fetch_one(self.pool)
        .await?;

        row.into_order()
    }

    /// Get an order by ID, scoped to its owner.
    ///
    /// Returns `None` both when the order does not exist and when it
    /// belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_for_user(
        &self,
        id: OrderId,
        owner: UserId,
    ) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_i32())
        .bind(owner.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, owner: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner.as_i32())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// List all orders with their owner's identity, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if any row is invalid.
    pub async fn list_all_with_owner(
        &self,
    ) -> Result<Vec<(Order, OwnerSummary)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct JoinedRow {
            #[sqlx(flatten)]
            order: OrderRow,
            owner_name: String,
            owner_email: String,
        }

        let rows: Vec<JoinedRow> = sqlx::query_as(
            "SELECT o.id, o.user_id, o.items, o.address, o.payment_details,
                    o.subtotal, o.shipping, o.tax, o.total, o.status, o.created_at,
                    u.name AS owner_name, u.email AS owner_email
             FROM orders o
             JOIN users u ON u.id = o.user_id
             ORDER BY o.created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                let email = Email::parse(&r.owner_email).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
                })?;
                let order = r.order.into_order()?;
                let owner = OwnerSummary {
                    id: order.user_id,
                    name: r.owner_name,
                    email,
                };
                Ok((order, owner))
            })
            .collect()
    }

    /// Overwrite an order's status and return the updated order.
    ///
    /// Last write wins: there is no version token guarding concurrent
    /// owner and admin updates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id.as_i32())
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }
}
