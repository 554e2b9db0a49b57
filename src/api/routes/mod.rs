pub mod ai;
pub mod evaluate;
pub mod health;
pub mod similarity;
pub mod vector_db;

use axum::http::{header, Method};
use axum::{middleware, routing::get, routing::post, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::middleware::request_logger;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api_routes())
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ai", post(ai::generate))
        .route("/function-call", post(ai::function_call))
        .route("/embed", post(vector_db::embed))
        .route("/cosine", post(similarity::cosine))
        .route("/euclidean", post(similarity::euclidean))
        .route("/dot", post(similarity::dot))
        .route("/vector-db/add", post(vector_db::add))
        .route("/vector-db/query", post(vector_db::query))
        .route("/evaluate", get(evaluate::evaluate))
}
