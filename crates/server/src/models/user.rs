//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quickbite_core::{Email, UserId};

/// A QuickBite user (domain type).
///
/// Created on first successful identity login (upsert-by-email) or seeded
/// via the CLI for admins. The email uniquely identifies a user.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name from the identity assertion.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Avatar image URL, if the identity provider supplied one.
    pub avatar_url: Option<String>,
    /// Whether this user may perform admin-scoped operations.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// User shape returned by the API.
///
/// Password hashes never leave the database layer; this is everything else.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar_url,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}
