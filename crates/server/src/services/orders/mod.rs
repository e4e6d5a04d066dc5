//! Order lifecycle service.
//!
//! The single validated contract for order creation, retrieval,
//! cancellation, and admin status updates. Route handlers are thin
//! translators over this service; the transport never re-implements
//! lifecycle rules.

mod error;
pub mod pricing;

pub use error::OrderError;

use std::str::FromStr;

use serde::Deserialize;
use sqlx::PgPool;

use quickbite_core::{OrderId, OrderStatus, UserId};

use crate::db::orders::{NewOrder, OrderRepository};
use crate::models::{Order, OrderItem, OwnerSummary, PaymentDetails, ShippingAddress};

/// Payload for order creation.
///
/// Totals are intentionally absent: the server computes them. Any totals a
/// client sends are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    pub address: ShippingAddress,
    pub payment_details: PaymentDetails,
}

/// Order lifecycle service.
///
/// Caller identity is always passed in explicitly; the service holds no
/// ambient session state.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Create an order for `caller`.
    ///
    /// Validates the payload (fail-fast, payment-method rules before
    /// structural checks), computes totals server-side, and persists with
    /// initial status `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` naming the first failing field, or
    /// `OrderError::Repository` if the insert fails.
    pub async fn create(
        &self,
        caller: UserId,
        request: CreateOrderRequest,
    ) -> Result<Order, OrderError> {
        validate(&request)?;

        let totals = pricing::compute_totals(&request.items);
        let new = NewOrder {
            items: request.items,
            address: request.address,
            payment_details: request.payment_details,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            tax: totals.tax,
            total: totals.total,
        };

        let order = self.orders.insert(caller, new).await?;
        tracing::info!(order_id = %order.id, user_id = %caller, "order created");
        Ok(order)
    }

    /// All of the caller's orders, newest first.
    ///
    /// An empty list is a valid result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list_own(&self, caller: UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.list_for_user(caller).await?)
    }

    /// Get one of the caller's orders by ID.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` when the order does not exist or is
    /// owned by someone else; the caller cannot tell which.
    pub async fn get(&self, caller: UserId, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .get_for_user(id, caller)
            .await?
            .ok_or(OrderError::NotFound)
    }

    /// Cancel one of the caller's orders.
    ///
    /// Any non-cancelled order may be cancelled, including shipped and
    /// delivered ones. Cancelling twice is an error.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` for missing or foreign orders,
    /// `OrderError::AlreadyCancelled` if the order is already cancelled.
    pub async fn cancel(&self, caller: UserId, id: OrderId) -> Result<Order, OrderError> {
        let order = self
            .orders
            .get_for_user(id, caller)
            .await?
            .ok_or(OrderError::NotFound)?;

        if !order.status.is_cancellable() {
            return Err(OrderError::AlreadyCancelled);
        }

        // No version token: a concurrent admin update is last-write-wins
        let cancelled = self
            .orders
            .update_status(id, OrderStatus::Cancelled)
            .await?
            .ok_or(OrderError::NotFound)?;

        tracing::info!(order_id = %id, user_id = %caller, "order cancelled");
        Ok(cancelled)
    }

    /// Overwrite an order's status (admin-scoped; the role check happens
    /// in the access-control envelope before this is reached).
    ///
    /// Any enumerated status may be assigned regardless of the current
    /// one, including moving a cancelled order back into the flow.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidStatus` for unenumerated values and
    /// `OrderError::NotFound` for missing orders.
    pub async fn admin_update_status(
        &self,
        id: OrderId,
        status: &str,
    ) -> Result<Order, OrderError> {
        let status = OrderStatus::from_str(status)?;

        let order = self
            .orders
            .update_status(id, status)
            .await?
            .ok_or(OrderError::NotFound)?;

        tracing::info!(order_id = %id, status = %status, "order status updated");
        Ok(order)
    }

    /// All orders with their owner's identity, newest first (admin-scoped).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn admin_list_all(&self) -> Result<Vec<(Order, OwnerSummary)>, OrderError> {
        Ok(self.orders.list_all_with_owner().await?)
    }
}

/// Validate a creation payload.
///
/// Check order: payment-method-specific required field first, then
/// structural presence. The first failing check wins.
fn validate(request: &CreateOrderRequest) -> Result<(), OrderError> {
    use quickbite_core::PaymentMethod;

    let payment = &request.payment_details;
    match payment.payment_method {
        PaymentMethod::Cod => {
            if payment
                .phone_number
                .as_deref()
                .is_none_or(|p| p.trim().is_empty())
            {
                return Err(OrderError::validation("paymentDetails.phoneNumber"));
            }
        }
        PaymentMethod::Online => {
            if payment
                .payment_reference
                .as_deref()
                .is_none_or(|r| r.trim().is_empty())
            {
                return Err(OrderError::validation("paymentDetails.paymentReference"));
            }
        }
    }

    if request.items.is_empty() {
        return Err(OrderError::validation("items"));
    }

    for (i, item) in request.items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(OrderError::validation(format!("items[{i}].quantity")));
        }
        if item.price.is_sign_negative() {
            return Err(OrderError::validation(format!("items[{i}].price")));
        }
    }

    let address = &request.address;
    for (field, value) in [
        ("address.street", &address.street),
        ("address.city", &address.city),
        ("address.state", &address.state),
        ("address.zip", &address.zip),
        ("address.country", &address.country),
    ] {
        if value.trim().is_empty() {
            return Err(OrderError::validation(field));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use quickbite_core::PaymentMethod;

    use super::*;

    fn valid_request(method: PaymentMethod) -> CreateOrderRequest {
        let payment_details = match method {
            PaymentMethod::Cod => PaymentDetails {
                payment_method: method,
                phone_number: Some("555-0100".to_owned()),
                payment_reference: None,
                last_four_digits: None,
            },
            PaymentMethod::Online => PaymentDetails {
                payment_method: method,
                phone_number: None,
                payment_reference: Some("pay_abc123".to_owned()),
                last_four_digits: Some("4242".to_owned()),
            },
        };

        CreateOrderRequest {
            items: vec![OrderItem {
                id: "margherita".to_owned(),
                name: "Margherita Pizza".to_owned(),
                price: Decimal::new(1050, 2),
                quantity: 2,
                image: Some("/img/margherita.png".to_owned()),
            }],
            address: ShippingAddress {
                street: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip: "62704".to_owned(),
                country: "US".to_owned(),
            },
            payment_details,
        }
    }

    fn failing_field(request: &CreateOrderRequest) -> String {
        match validate(request).unwrap_err() {
            OrderError::Validation { field } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_requests_pass() {
        assert!(validate(&valid_request(PaymentMethod::Cod)).is_ok());
        assert!(validate(&valid_request(PaymentMethod::Online)).is_ok());
    }

    #[test]
    fn test_cod_requires_phone_number() {
        let mut request = valid_request(PaymentMethod::Cod);
        request.payment_details.phone_number = None;
        assert_eq!(failing_field(&request), "paymentDetails.phoneNumber");

        // Whitespace-only is as good as missing
        request.payment_details.phone_number = Some("   ".to_owned());
        assert_eq!(failing_field(&request), "paymentDetails.phoneNumber");
    }

    #[test]
    fn test_online_requires_payment_reference() {
        let mut request = valid_request(PaymentMethod::Online);
        request.payment_details.payment_reference = None;
        assert_eq!(failing_field(&request), "paymentDetails.paymentReference");
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut request = valid_request(PaymentMethod::Cod);
        request.items.clear();
        assert_eq!(failing_field(&request), "items");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut request = valid_request(PaymentMethod::Cod);
        request.items[0].quantity = 0;
        assert_eq!(failing_field(&request), "items[0].quantity");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut request = valid_request(PaymentMethod::Cod);
        request.items[0].price = Decimal::new(-100, 2);
        assert_eq!(failing_field(&request), "items[0].price");
    }

    #[test]
    fn test_missing_address_field_rejected() {
        let mut request = valid_request(PaymentMethod::Cod);
        request.address.city = String::new();
        assert_eq!(failing_field(&request), "address.city");
    }

    #[test]
    fn test_payment_check_precedes_structural_checks() {
        // Both the payment field and the items are bad; the payment
        // error must win (fail-fast ordering)
        let mut request = valid_request(PaymentMethod::Cod);
        request.payment_details.phone_number = None;
        request.items.clear();
        assert_eq!(failing_field(&request), "paymentDetails.phoneNumber");
    }

    #[test]
    fn test_client_totals_are_not_part_of_the_contract() {
        // Deserializing a payload that includes client-computed totals
        // simply drops them
        let json = serde_json::json!({
            "items": [{"id": "a", "name": "A", "price": "10", "quantity": 2}],
            "address": {
                "street": "1 Main St", "city": "Springfield",
                "state": "IL", "zip": "62704", "country": "US"
            },
            "paymentDetails": {"paymentMethod": "COD", "phoneNumber": "555-0100"},
            "subtotal": 1, "shipping": 2, "tax": 3, "total": 4
        });
        let request: CreateOrderRequest = serde_json::from_value(json).unwrap();
        assert!(validate(&request).is_ok());
        let totals = pricing::compute_totals(&request.items);
        assert_eq!(totals.subtotal, Decimal::new(2000, 2));
    }
}
