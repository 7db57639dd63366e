//! Axum route handlers for the Careers API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::careers::catalog::CareerRecord;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/careers
///
/// Lists the catalog in catalog order, without scores.
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerRecord>> {
    Json(state.catalog.list_all().to_vec())
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerRecord>, AppError> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
