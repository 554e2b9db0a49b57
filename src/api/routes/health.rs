use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub vectors: usize,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Ready as long as the vector store lock is usable.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    match state.vector_service.len().await {
        Ok(vectors) => Ok(Json(ReadinessResponse {
            status: "ready".into(),
            vectors,
        })),
        Err(e) => {
            tracing::error!(error = %e, "vector store unavailable");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
