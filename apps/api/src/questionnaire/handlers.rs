//! Axum route handler for questionnaire submission.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::auth::session::SessionState;
use crate::careers::ranking::ScoredCareer;
use crate::errors::{AppError, AppJson};
use crate::questionnaire::models::{QuestionnaireAnswers, QuestionnaireSubmission};
use crate::questionnaire::validation::validate_submission;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub answers: QuestionnaireAnswers,
    pub recommendations: Vec<ScoredCareer>,
}

/// POST /api/v1/questionnaire
///
/// Validates the submission (merging any connected LinkedIn skills) and returns
/// every catalog career ranked by match score.
pub async fn handle_submit_questionnaire(
    State(state): State<AppState>,
    session: SessionState,
    AppJson(submission): AppJson<QuestionnaireSubmission>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = session.require()?;
    let answers = validate_submission(submission, session.linked_skills())?;

    info!(
        "User {} submitted questionnaire ({} interests, {} skills, {} values)",
        session.user_id,
        answers.interests.len(),
        answers.skills.len(),
        answers.values.len()
    );

    let recommendations = state.recommender.recommend(&answers).await?;

    Ok(Json(RecommendationsResponse {
        answers,
        recommendations,
    }))
}
