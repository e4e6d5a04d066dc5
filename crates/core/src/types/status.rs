//! Order status and payment method enumerations.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a member of the order status
/// enumeration.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct InvalidOrderStatus(pub String);

/// Order lifecycle status.
///
/// Orders start as `Pending` and are moved by admins through the
/// fulfillment states. `Cancelled` is the owner-facing terminal state:
/// a cancelled order cannot be cancelled again, and orders are never
/// deleted.
///
/// The wire representation is the exact variant name (`"Pending"`,
/// `"Shipped"`, ...). Anything outside the enumeration is rejected at
/// the boundary, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All members of the enumeration, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether an owner-initiated cancellation is allowed from this state.
    ///
    /// Only `Cancelled` itself blocks cancellation; a shipped or delivered
    /// order may still be cancelled.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// The canonical wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(InvalidOrderStatus(other.to_owned())),
        }
    }
}

/// How an order is paid for.
///
/// Each method carries its own required payment descriptor field:
/// cash-on-delivery requires a contact phone number, online payment
/// requires a payment reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[serde(rename = "COD")]
    Cod,
    /// Online payment (card or wallet).
    Online,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cod => write!(f, "COD"),
            Self::Online => write!(f, "Online"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unenumerated() {
        assert!(OrderStatus::from_str("Archived").is_err());
        // Wire strings are exact; lowercase is not accepted
        assert!(OrderStatus::from_str("pending").is_err());
        assert!(OrderStatus::from_str("").is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_cancellable() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Shipped.is_cancellable());
        assert!(OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_status_serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"Shipped\""
        );
        let status: OrderStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"COD\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Online).unwrap(),
            "\"Online\""
        );
        let method: PaymentMethod = serde_json::from_str("\"COD\"").unwrap();
        assert_eq!(method, PaymentMethod::Cod);
    }
}
