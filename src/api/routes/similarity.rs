use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiJson};
use crate::domain::similarity;

#[derive(Debug, Deserialize)]
pub struct VectorPair {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
}

impl VectorPair {
    fn checked(self) -> Result<Self, ApiError> {
        if similarity::same_dimension(&self.a, &self.b) {
            Ok(self)
        } else {
            Err(ApiError::bad_request(format!(
                "Vectors must have the same length (a: {}, b: {})",
                self.a.len(),
                self.b.len()
            )))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    /// `null` when either vector has zero magnitude.
    pub similarity: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub distance: f32,
}

#[derive(Debug, Serialize)]
pub struct DotResponse {
    pub dot: f32,
}

pub async fn cosine(
    ApiJson(pair): ApiJson<VectorPair>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let pair = pair.checked()?;
    let score = similarity::cosine_similarity(&pair.a, &pair.b);
    Ok(Json(SimilarityResponse {
        similarity: (!score.is_nan()).then_some(score),
    }))
}

pub async fn euclidean(
    ApiJson(pair): ApiJson<VectorPair>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let pair = pair.checked()?;
    Ok(Json(DistanceResponse {
        distance: similarity::euclidean_distance(&pair.a, &pair.b),
    }))
}

pub async fn dot(ApiJson(pair): ApiJson<VectorPair>) -> Result<Json<DotResponse>, ApiError> {
    let pair = pair.checked()?;
    Ok(Json(DotResponse {
        dot: similarity::dot_product(&pair.a, &pair.b),
    }))
}
