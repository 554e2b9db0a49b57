#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use prompt_lab::api::{create_router, AppState};
use prompt_lab::domain::ports::{EmbeddingService, LlmService};
use prompt_lab::domain::{DomainError, Embedding, GenerationConfig};
use prompt_lab::infrastructure::{AppConfig, InMemoryVectorStore};

/// Embeds text onto three axes: feline words, canine words and a constant bias.
pub struct KeywordEmbedding;

#[async_trait]
impl EmbeddingService for KeywordEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        let text = text.to_lowercase();
        let hit = |words: &[&str]| -> f32 {
            if words.iter().any(|w| text.contains(w)) {
                1.0
            } else {
                0.0
            }
        };
        Ok(Embedding::new(vec![
            hit(&["cat", "feline", "kitten"]),
            hit(&["dog", "canine", "puppy"]),
            0.1,
        ]))
    }

    fn dimension(&self) -> usize {
        3
    }
}

/// Answers by recognising which kind of prompt it was given.
#[derive(Default)]
pub struct FakeLlm {
    pub calls: AtomicUsize,
}

#[async_trait]
impl LlmService for FakeLlm {
    async fn complete(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = if prompt.contains("strict evaluator") {
            r#"{"match": true, "reason": "equivalent"}"#.to_string()
        } else if prompt.contains("Extract the person's name") {
            "```json\n{\"name\": \"Ada\", \"age\": 36}\n```".to_string()
        } else if prompt.contains("{\"output\"") {
            r#"{"output": "fake answer"}"#.to_string()
        } else {
            format!("  echo: {}  ", prompt.lines().last().unwrap_or_default())
        };
        Ok(reply)
    }

    async fn count_tokens(&self, prompt: &str) -> Result<usize, DomainError> {
        Ok(prompt.split_whitespace().count())
    }
}

/// Fails every call the way an unreachable provider would.
pub struct DownLlm;

#[async_trait]
impl LlmService for DownLlm {
    async fn complete(&self, _: &str, _: &GenerationConfig) -> Result<String, DomainError> {
        Err(DomainError::external("connection refused"))
    }

    async fn count_tokens(&self, _: &str) -> Result<usize, DomainError> {
        Err(DomainError::external("connection refused"))
    }
}

pub fn app_with(llm: Arc<dyn LlmService>) -> Router {
    let state = AppState::new(
        AppConfig::default(),
        llm,
        Arc::new(KeywordEmbedding),
        Arc::new(InMemoryVectorStore::new()),
    );
    create_router(state)
}

pub fn app() -> Router {
    app_with(Arc::new(FakeLlm::default()))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}
