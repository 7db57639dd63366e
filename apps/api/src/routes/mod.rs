pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::careers::handlers as careers;
use crate::profile::handlers as profile;
use crate::questionnaire::handlers as questionnaire;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth API
        .route("/api/v1/auth/sign-in", post(auth::handle_sign_in))
        .route("/api/v1/auth/sign-up", post(auth::handle_sign_up))
        .route("/api/v1/auth/sign-out", post(auth::handle_sign_out))
        .route("/api/v1/auth/session", get(auth::handle_get_session))
        // Careers API
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/:id", get(careers::handle_get_career))
        .route(
            "/api/v1/questionnaire",
            post(questionnaire::handle_submit_questionnaire),
        )
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/linkedin/connect",
            post(profile::handle_connect_linkedin),
        )
        .with_state(state)
}
