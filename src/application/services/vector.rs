use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    DomainError, Embedding, ScoredRecord, VectorRecord,
};

/// Embeds text on the way in and on the way out of a [`VectorStore`].
pub struct VectorService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    default_top_k: usize,
}

fn require<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::validation(format!("Missing {field}"))),
    }
}

impl VectorService {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        default_top_k: usize,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            default_top_k,
        }
    }

    /// Embeds `text` and checks the vector has the configured dimension.
    async fn embed_checked(&self, text: &str) -> Result<Embedding, DomainError> {
        let embedding = self.embedding.embed(text).await?;
        let expected = self.embedding.dimension();
        if embedding.dimension() != expected {
            return Err(DomainError::internal(format!(
                "embedding has {} dimensions, expected {expected}",
                embedding.dimension()
            )));
        }
        Ok(embedding)
    }

    #[instrument(skip(self))]
    pub async fn embed(&self, text: Option<&str>) -> Result<Embedding, DomainError> {
        let text = require(text, "text")?;
        self.embed_checked(text).await
    }

    #[instrument(skip(self, text))]
    pub async fn add(
        &self,
        id: Option<&str>,
        text: Option<&str>,
    ) -> Result<VectorRecord, DomainError> {
        let (id, text) = match (id, text) {
            (Some(id), Some(text)) if !id.is_empty() && !text.is_empty() => (id, text),
            _ => return Err(DomainError::validation("Missing id or text")),
        };

        let embedding = self.embed_checked(text).await?;
        let record = VectorRecord::new(id, text, embedding);
        self.vector_store.insert(record.clone()).await?;

        tracing::info!(id, dimension = record.embedding.dimension(), "vector stored");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn query(
        &self,
        query_text: Option<&str>,
        top_k: Option<usize>,
    ) -> Result<Vec<ScoredRecord>, DomainError> {
        let query_text = require(query_text, "queryText")?;
        let top_k = top_k.unwrap_or(self.default_top_k);

        let embedding = self.embed_checked(query_text).await?;
        self.vector_store.search(&embedding, top_k).await
    }

    pub async fn len(&self) -> Result<usize, DomainError> {
        self.vector_store.len().await
    }
}
