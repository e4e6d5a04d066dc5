//! Order domain types.
//!
//! An order is owned by exactly one user and is never deleted; its line
//! items, address, payment descriptor, and totals are fixed at creation,
//! and only `status` changes afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickbite_core::{Email, OrderId, OrderStatus, PaymentMethod, UserId};

/// A persisted order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned order ID.
    pub id: OrderId,
    /// Owning user; immutable after creation.
    #[serde(rename = "owner")]
    pub user_id: UserId,
    /// Ordered line items, immutable after creation.
    pub items: Vec<OrderItem>,
    /// Shipping address captured at submission.
    pub address: ShippingAddress,
    /// Payment descriptor captured at submission.
    pub payment_details: PaymentDetails,
    /// `Σ(item.price × item.quantity)`, rounded to 2 decimal places.
    pub subtotal: Decimal,
    /// Flat shipping fee applied at creation.
    pub shipping: Decimal,
    /// Tax applied at creation.
    pub tax: Decimal,
    /// `subtotal + shipping + tax`.
    pub total: Decimal,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

/// A single line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Catalog item identifier (opaque to the backend).
    pub id: String,
    /// Item name as displayed at checkout.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Quantity ordered; must be at least 1.
    pub quantity: u32,
    /// Image reference for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Shipping address; all five fields are required at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Payment descriptor.
///
/// Method-specific requirements are enforced at order creation:
/// COD requires `phone_number`, Online requires `payment_reference`.
/// Missing fields reject the order; they are never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub payment_method: PaymentMethod,
    /// Contact number for cash-on-delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Provider reference for online payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    /// Last four card digits, when the provider reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
}

/// Owner identity embedded in admin order listings.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}
