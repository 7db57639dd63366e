//! Axum route handlers for the Profile API. All routes require a session.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::session::SessionState;
use crate::errors::{AppError, AppJson};
use crate::models::user::User;
use crate::profile::linkedin::{self, LinkedInProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
    pub linkedin: LinkedInProfile,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    session: SessionState,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = session.require()?;
    let user = state
        .users
        .get(session.user_id)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", session.user_id)))?;

    Ok(Json(ProfileResponse {
        user,
        linkedin: session
            .linked_profile
            .unwrap_or_else(LinkedInProfile::disconnected),
    }))
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    session: SessionState,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let session = session.require()?;
    let user = state.users.update_name(session.user_id, &req.name)?;
    info!("User {} updated profile", user.id);
    Ok(Json(user))
}

/// POST /api/v1/profile/linkedin/connect
///
/// Connects the mock LinkedIn profile to the current session. Its skills are
/// merged into later questionnaire submissions.
pub async fn handle_connect_linkedin(
    State(state): State<AppState>,
    session: SessionState,
) -> Result<Json<LinkedInProfile>, AppError> {
    let session = session.require()?;
    let profile = linkedin::connect(state.config.linkedin_delay()).await;
    state
        .sessions
        .attach_linked_profile(session.token, profile.clone())?;

    info!("User {} connected LinkedIn", session.user_id);
    Ok(Json(profile))
}
