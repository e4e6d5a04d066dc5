//! Session-related types.
//!
//! Types stored in the session for authentication state. The session id
//! itself is an opaque cookie; everything identity-related lives server-side
//! and is re-checked against the user table on every authenticated request.

use serde::{Deserialize, Serialize};

use quickbite_core::{Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
