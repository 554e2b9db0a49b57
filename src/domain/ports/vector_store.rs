use crate::domain::{errors::DomainError, Embedding, ScoredRecord, VectorRecord};
use async_trait::async_trait;

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Appends a record. Ids are not checked for uniqueness.
    async fn insert(&self, record: VectorRecord) -> Result<(), DomainError>;
    /// Returns at most `top_k` records ordered by descending cosine similarity.
    async fn search(&self, query: &Embedding, top_k: usize)
        -> Result<Vec<ScoredRecord>, DomainError>;
    async fn len(&self) -> Result<usize, DomainError>;
}
