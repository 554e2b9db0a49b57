use std::sync::Arc;

use crate::application::{EvaluationService, PromptService, VectorService};
use crate::domain::ports::{EmbeddingService, LlmService, VectorStore};
use crate::infrastructure::AppConfig;

/// Everything a handler needs. Services are built once at startup and shared.
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<PromptService>,
    pub vector_service: Arc<VectorService>,
    pub evaluation_service: Arc<EvaluationService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        llm: Arc<dyn LlmService>,
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        let generation = config.config.llm.generation.clone();
        let vector_service = VectorService::new(
            embedding,
            vector_store,
            config.config.vector_store.default_top_k,
        );

        Self {
            prompt_service: Arc::new(PromptService::new(llm.clone(), generation.clone())),
            vector_service: Arc::new(vector_service),
            evaluation_service: Arc::new(EvaluationService::new(llm, generation)),
            config: Arc::new(config),
        }
    }
}
