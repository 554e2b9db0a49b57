use prompt_lab::api::{create_router, AppState};
use prompt_lab::infrastructure::{AppConfig, GeminiEmbedding, GeminiLlm, InMemoryVectorStore};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,prompt_lab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(model = %config.config.llm.model, "configuration loaded");

    let llm = Arc::new(GeminiLlm::from_env(&config.config.llm)?);
    let embedding = Arc::new(GeminiEmbedding::from_config(
        &config.config.embedding,
        Duration::from_secs(config.config.llm.timeout_seconds),
    ));
    let vector_store = Arc::new(InMemoryVectorStore::new());

    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(config, llm, embedding, vector_store);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
