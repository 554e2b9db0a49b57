use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::error::{ApiError, ApiJson};
use crate::api::state::AppState;
use crate::domain::{Generation, GenerationConfig, PersonInfo};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRequest {
    pub user_input: Option<String>,
    pub option: Option<String>,
    pub config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallRequest {
    pub user_input: Option<String>,
}

pub async fn generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AiRequest>,
) -> Result<Json<Generation>, ApiError> {
    let generation = state
        .prompt_service
        .generate(
            request.user_input.as_deref(),
            request.option.as_deref(),
            request.config,
        )
        .await?;

    Ok(Json(generation))
}

pub async fn function_call(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FunctionCallRequest>,
) -> Result<Json<PersonInfo>, ApiError> {
    let person = state
        .prompt_service
        .extract_person(request.user_input.as_deref())
        .await?;

    Ok(Json(person))
}
