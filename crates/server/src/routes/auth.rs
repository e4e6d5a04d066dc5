//! Authentication routes.
//!
//! The SPA decodes the OAuth credential client-side and posts the asserted
//! identity here; token verification against the provider is the SPA's
//! collaborator, not this backend's concern.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{RequireUser, clear_current_user, set_current_user};
use crate::models::{CurrentUser, UserResponse};
use crate::services::AuthService;
use crate::state::AppState;

/// Identity assertion posted by the SPA after OAuth.
#[derive(Debug, Deserialize)]
pub struct IdentityLoginRequest {
    pub name: String,
    pub email: String,
    /// Avatar URL; the SPA sends the provider's `picture` claim.
    #[serde(default, alias = "picture")]
    pub avatar: Option<String>,
}

/// Identity-assertion login, upserting the user by email.
///
/// POST /api/auth/google
///
/// # Errors
///
/// Returns 400 for a malformed email, 500 for storage failures.
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<IdentityLoginRequest>,
) -> Result<Json<UserResponse>> {
    let auth = AuthService::new(state.pool());
    let user = auth
        .login_with_identity(&req.name, &req.email, req.avatar.as_deref())
        .await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email.clone(),
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(user.into()))
}

/// Admin password login.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin login with email and password.
///
/// POST /api/auth/admin
///
/// # Errors
///
/// Returns 403 for non-admin accounts, 401 for bad credentials.
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<UserResponse>> {
    let auth = AuthService::new(state.pool());
    let user = auth.login_admin(&req.email, &req.password).await?;

    let current = CurrentUser {
        id: user.id,
        email: user.email.clone(),
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(user.into()))
}

/// Destroy the caller's session.
///
/// POST /api/auth/logout
///
/// # Errors
///
/// Returns 500 if the session store fails.
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(serde_json::json!({ "message": "Logged out" })))
}

/// Current authenticated user's profile.
///
/// GET /api/auth/me
///
/// # Errors
///
/// Returns 401 without a valid session.
pub async fn me(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(user.into())
}
