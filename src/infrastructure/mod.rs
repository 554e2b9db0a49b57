pub mod config;
pub mod embedding;
pub mod llm;
pub mod vector_store;

pub use config::{AppConfig, Config, ConfigError};
pub use embedding::GeminiEmbedding;
pub use llm::GeminiLlm;
pub use vector_store::InMemoryVectorStore;
