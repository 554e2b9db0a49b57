use crate::domain::{errors::DomainError, Embedding};
use async_trait::async_trait;

/// Turns text into a vector. Every vector from one service has the same length.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError>;
    /// Length of every vector returned by [`EmbeddingService::embed`].
    fn dimension(&self) -> usize;
}
