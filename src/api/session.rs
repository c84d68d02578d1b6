//! Login and session endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::auth::{resolve_role, Role};
use crate::errors::AppError;
use crate::AppState;

/// Request body for login. No password: the email alone decides the role.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    pub email: String,
}

/// The outcome of a login: the role the view router should navigate to.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "rol")]
    pub role: Role,
    #[serde(rename = "correo")]
    pub email: String,
}

/// POST /api/login - Resolve an email to a role and establish the session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    let doc = state.roster.load().await;
    match resolve_role(&doc, &request.email) {
        Some(role) => {
            let session = state.sessions.establish(&request.email).await?;
            tracing::info!(role = ?role, "Login accepted");
            success(LoginResponse {
                role,
                email: session.email,
            })
        }
        None => Err(AppError::InvalidCredential(
            "Enter a registered email".to_string(),
        )),
    }
}

/// The current session and the role it resolves to today.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// GET /api/session - The current session, if any.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionResponse> {
    let session = state
        .sessions
        .current()
        .await?
        .ok_or_else(|| AppError::NotFound("No active session".to_string()))?;

    let doc = state.roster.load().await;
    let role = resolve_role(&doc, &session.email);
    success(SessionResponse {
        email: session.email,
        role,
    })
}

/// DELETE /api/session - Clear the current session.
pub async fn clear_session(State(state): State<AppState>) -> ApiResult<()> {
    state.sessions.clear().await?;
    success(())
}
