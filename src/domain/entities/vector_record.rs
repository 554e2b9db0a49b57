use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Embedding;

/// A stored piece of text together with its embedding.
///
/// `id` is supplied by the caller and is not required to be unique; records
/// sharing an id coexist in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub text: String,
    pub embedding: Embedding,
    pub created_at: DateTime<Utc>,
}

impl VectorRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>, embedding: Embedding) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            embedding,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub id: String,
    pub text: String,
    pub score: f32,
}

impl ScoredRecord {
    pub fn from_record(record: &VectorRecord, score: f32) -> Self {
        Self {
            id: record.id.clone(),
            text: record.text.clone(),
            score,
        }
    }
}
