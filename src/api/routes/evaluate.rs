use axum::{extract::State, Json};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::EvaluationResult;

pub async fn evaluate(
    State(state): State<AppState>,
) -> Result<Json<Vec<EvaluationResult>>, ApiError> {
    let results = state.evaluation_service.run().await?;
    Ok(Json(results))
}
