use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiJson};
use crate::api::state::AppState;
use crate::domain::{Embedding, ScoredRecord};

#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub id: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoredRecord {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub success: bool,
    pub stored: StoredRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query_text: Option<String>,
    pub top_k: Option<usize>,
}

pub async fn embed(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EmbedRequest>,
) -> Result<Json<Embedding>, ApiError> {
    let embedding = state
        .vector_service
        .embed(request.text.as_deref())
        .await?;
    Ok(Json(embedding))
}

pub async fn add(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddRequest>,
) -> Result<Json<AddResponse>, ApiError> {
    let record = state
        .vector_service
        .add(request.id.as_deref(), request.text.as_deref())
        .await?;

    Ok(Json(AddResponse {
        success: true,
        stored: StoredRecord {
            id: record.id,
            text: record.text,
        },
    }))
}

pub async fn query(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QueryRequest>,
) -> Result<Json<Vec<ScoredRecord>>, ApiError> {
    let results = state
        .vector_service
        .query(request.query_text.as_deref(), request.top_k)
        .await?;
    Ok(Json(results))
}
