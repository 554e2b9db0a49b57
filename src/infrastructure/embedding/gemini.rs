use async_trait::async_trait;
use rig::client::{EmbeddingsClient, ProviderClient};
use rig::embeddings::EmbeddingsBuilder;
use rig::providers::gemini;
use std::time::Duration;

use crate::domain::{ports::EmbeddingService, DomainError, Embedding};
use crate::infrastructure::config::EmbeddingConfig;

pub struct GeminiEmbedding {
    client: gemini::Client,
    model: String,
    dimension: usize,
    timeout: Duration,
}

impl GeminiEmbedding {
    /// Expects `GEMINI_API_KEY` to be present; see [`crate::infrastructure::GeminiLlm::from_env`].
    pub fn from_config(config: &EmbeddingConfig, timeout: Duration) -> Self {
        Self {
            client: gemini::Client::from_env(),
            model: config.model.clone(),
            dimension: config.dimension,
            timeout,
        }
    }
}

#[async_trait]
impl EmbeddingService for GeminiEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        let model = self.client.embedding_model(&self.model);

        let build = EmbeddingsBuilder::new(model)
            .document(text)
            .map_err(|e| DomainError::external(e.to_string()))?
            .build();

        let embeddings = tokio::time::timeout(self.timeout, build)
            .await
            .map_err(|_| DomainError::timeout("Embedding timed out"))?
            .map_err(|e| DomainError::external(e.to_string()))?;

        embeddings
            .into_iter()
            .next()
            .map(|(_doc, emb)| {
                let vec_f32: Vec<f32> = emb.first().vec.into_iter().map(|x| x as f32).collect();
                Embedding::new(vec_f32)
            })
            .ok_or_else(|| DomainError::internal("No embedding returned"))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
