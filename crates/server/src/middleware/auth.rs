//! Authentication extractors — the access-control envelope.
//!
//! `RequireUser` resolves the caller's identity from the session and
//! re-verifies it against the user table; `RequireAdmin` additionally
//! requires the admin role. Both run before the handler body, so no
//! mutation can begin if either check fails. Ownership checks live in the
//! order queries themselves.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::{CurrentUser, User, session_keys};
use crate::state::AppState;

/// Extractor that requires an authenticated user.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(unauthenticated)?;

        let current: CurrentUser = session
            .get(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten()
            .ok_or_else(unauthenticated)?;

        // The session may outlive the account; re-check the directory
        let user = UserRepository::new(state.pool())
            .get_by_id(current.id)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("User not found. Please log in again.".to_owned())
            })?;

        Ok(Self(user))
    }
}

/// Extractor that requires an authenticated admin.
///
/// Rejects with 401 when there is no session and 403 when the caller is
/// authenticated but not an admin — the two are deliberately distinct.
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            tracing::warn!(user_id = %user.id, "admin access denied");
            return Err(AppError::Forbidden(
                "Access denied. Admin privileges required.".to_owned(),
            ));
        }

        Ok(Self(user))
    }
}

fn unauthenticated() -> AppError {
    AppError::Unauthorized("Not authenticated.".to_owned())
}

/// Helper to set the current user in the session after login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to destroy the session (logout).
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
