//! Business-logic services sitting between routes and repositories.

pub mod auth;
pub mod orders;

pub use auth::{AuthError, AuthService};
pub use orders::{OrderError, OrderService};
