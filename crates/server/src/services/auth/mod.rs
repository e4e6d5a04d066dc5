//! Authentication service.
//!
//! Two login paths: identity-assertion login for regular users (the SPA
//! decodes the OAuth token and posts name/email/avatar), and password
//! login for admins seeded via the CLI.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use sqlx::PgPool;

use quickbite_core::Email;

use crate::db::users::UserRepository;
use crate::models::User;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Log in with an identity assertion, creating the user on first login.
    ///
    /// Upserts by email: an existing user gets their name and avatar
    /// refreshed from the assertion.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the asserted email is malformed.
    /// Returns `AuthError::Repository` if the upsert fails.
    pub async fn login_with_identity(
        &self,
        name: &str,
        email: &str,
        avatar_url: Option<&str>,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let user = self.users.upsert_identity(name, &email, avatar_url).await?;
        tracing::info!(user_id = %user.id, "identity login");
        Ok(user)
    }

    /// Log in an admin with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAdmin` if the user exists but lacks the admin
    /// role, `AuthError::InvalidCredentials` if the account or password is
    /// wrong.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        // Role is checked before the password; a non-admin account never
        // reaches verification
        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;
        if !user.is_admin {
            return Err(AuthError::NotAdmin);
        }

        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        tracing::info!(user_id = %user.id, "admin login");
        Ok(user)
    }
}

/// Verify a password against a stored Argon2 hash.
///
/// Admin hashes are produced by `qb-cli admin create`; this side only
/// ever verifies.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on mismatch.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    use super::*;

    /// Hash the way the CLI seeding path does.
    fn seeded_hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_accepts_seeded_hash() {
        let hash = seeded_hash("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = seeded_hash("correct horse battery staple");
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::PasswordHash)
        ));
    }
}
