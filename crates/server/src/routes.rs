use axum::{
    http::{Method, Uri},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub mod brands;
pub mod cars;
pub mod docs;
pub mod seed;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn fallback(method: Method, uri: Uri) -> JsonApiError {
    JsonApiError::not_found(format!("Cannot {} {}", method, uri.path()))
}

/// Build the full application router: health, both resources, seed and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let cars_routes = Router::new()
        .route("/cars", get(cars::list).post(cars::create))
        .route("/cars/:id", get(cars::get).patch(cars::update).delete(cars::delete));

    let brands_routes = Router::new()
        .route("/brands", get(brands::list).post(brands::create))
        .route("/brands/:id", get(brands::get).patch(brands::update).delete(brands::delete));

    Router::new()
        .route("/health", get(health))
        .route("/seed", get(seed::run_seed))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(cars_routes)
        .merge(brands_routes)
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
