use crate::domain::{errors::DomainError, GenerationConfig};
use async_trait::async_trait;

#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, prompt: &str, config: &GenerationConfig)
        -> Result<String, DomainError>;
    async fn count_tokens(&self, prompt: &str) -> Result<usize, DomainError>;
}
