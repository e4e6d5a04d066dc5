//! Middleware and request extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, RequireUser, clear_current_user, set_current_user};
pub use session::create_session_layer;
