//! Order lifecycle error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during order lifecycle operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A creation payload field is missing or invalid.
    ///
    /// Carries the path of the first failing field (fail-fast, not
    /// aggregated), e.g. `paymentDetails.phoneNumber` or `items[0].quantity`.
    #[error("missing or invalid field: {field}")]
    Validation {
        /// Path of the offending field in the request payload.
        field: String,
    },

    /// The order does not exist, or is not owned by the caller.
    ///
    /// The two cases are intentionally indistinguishable.
    #[error("order not found")]
    NotFound,

    /// Cancellation of an order that is already cancelled.
    ///
    /// A second cancel is an error, not a no-op.
    #[error("order is already cancelled")]
    AlreadyCancelled,

    /// A status value outside the enumeration.
    #[error(transparent)]
    InvalidStatus(#[from] quickbite_core::InvalidOrderStatus),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

impl OrderError {
    /// Shorthand for a validation failure on `field`.
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }
}
