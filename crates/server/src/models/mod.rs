//! Domain models for the QuickBite backend.

pub mod order;
pub mod session;
pub mod user;

pub use order::{Order, OrderItem, OwnerSummary, PaymentDetails, ShippingAddress};
pub use session::{CurrentUser, keys as session_keys};
pub use user::{User, UserResponse};
