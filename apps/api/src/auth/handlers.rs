//! Axum route handlers for the mock Auth API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::session::SessionState;
use crate::errors::{AppError, AppJson};
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: Uuid,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<User>,
}

/// POST /api/v1/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignInRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tokio::time::sleep(state.config.auth_delay()).await;

    let user = state
        .users
        .sign_in(&req.email, &req.password)?
        .ok_or(AppError::InvalidCredentials)?;
    let session = state.sessions.open(user.id)?;

    info!("User {} signed in", user.id);
    Ok(Json(AuthResponse {
        token: session.token,
        user,
    }))
}

/// POST /api/v1/auth/sign-up
pub async fn handle_sign_up(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignUpRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    tokio::time::sleep(state.config.auth_delay()).await;

    let user = state.users.sign_up(&req.name, &req.email, &req.password)?;
    let session = state.sessions.open(user.id)?;

    info!("User {} signed up", user.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
            user,
        }),
    ))
}

/// POST /api/v1/auth/sign-out
pub async fn handle_sign_out(
    State(state): State<AppState>,
    session: SessionState,
) -> Result<StatusCode, AppError> {
    if let SessionState::Authenticated(session) = session {
        state.sessions.close(session.token)?;
        info!("User {} signed out", session.user_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
pub async fn handle_get_session(
    State(state): State<AppState>,
    session: SessionState,
) -> Result<Json<SessionResponse>, AppError> {
    let authenticated = session.is_authenticated();
    let user = match session {
        SessionState::Authenticated(session) => state.users.get(session.user_id)?,
        SessionState::Anonymous => None,
    };

    Ok(Json(SessionResponse {
        authenticated: authenticated && user.is_some(),
        user,
    }))
}
