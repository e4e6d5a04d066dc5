//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! qb-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//! ```

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use sqlx::PgPool;

use quickbite_core::{Email, EmailError};

const MIN_PASSWORD_LENGTH: usize = 12;

/// Admin command errors.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// Required environment variable not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid email format.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password too weak.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),

    /// Password hashing failed.
    #[error("Failed to hash password")]
    PasswordHash,
}

/// Create a new admin user with a password credential.
///
/// # Errors
///
/// Fails on a malformed email, a short password, a duplicate email, or
/// a database error.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AdminError::WeakPassword);
    }

    let database_url = std::env::var("QUICKBITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| AdminError::MissingEnvVar("QUICKBITE_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AdminError::PasswordHash)?
        .to_string();

    tracing::info!("Creating admin user: {}", email);

    let user_id: i32 = sqlx::query_scalar(
        "INSERT INTO users (name, email, is_admin, password_hash) \
         VALUES ($1, $2, TRUE, $3) \
         RETURNING id",
    )
    .bind(name)
    .bind(email.as_str())
    .bind(&password_hash)
    .fetch_one(&pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AdminError::UserExists(email.as_str().to_owned())
        }
        _ => AdminError::Database(e),
    })?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}",
        user_id,
        email
    );

    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_rejected_before_any_io() {
        let err = tokio_test(create_user("admin@example.com", "Admin", "short"));
        assert!(matches!(err, Err(AdminError::WeakPassword)));
    }

    #[test]
    fn malformed_email_rejected() {
        let err = tokio_test(create_user("not-an-email", "Admin", "a long enough password"));
        assert!(matches!(err, Err(AdminError::InvalidEmail(_))));
    }

    fn tokio_test<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(fut)
    }
}
