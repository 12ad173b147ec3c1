//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener. The extraction service is
//! replaced by in-process stubs so no request leaves the test.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use offload_api::config::ServerConfig;
use offload_api::router::build_app_router;
use offload_api::state::AppState;
use offload_core::extraction::ExtractedBrainDump;
use offload_extractor::{BrainDumpExtractor, ExtractorError};

/// Extractor stub returning a canned result.
pub struct StubExtractor(pub ExtractedBrainDump);

#[async_trait]
impl BrainDumpExtractor for StubExtractor {
    async fn extract(&self, _text: &str) -> Result<ExtractedBrainDump, ExtractorError> {
        Ok(self.0.clone())
    }
}

/// Extractor stub that always fails, for error-path tests.
pub struct FailingExtractor;

#[async_trait]
impl BrainDumpExtractor for FailingExtractor {
    async fn extract(&self, _text: &str) -> Result<ExtractedBrainDump, ExtractorError> {
        Err(ExtractorError::Api {
            status: 503,
            body: "model overloaded".to_string(),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        extractor_url: "http://127.0.0.1:0".to_string(),
    }
}

/// Build the application router with the given pool and an extractor
/// that returns nothing.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_extractor(pool, Arc::new(StubExtractor(ExtractedBrainDump::default())))
}

/// Build the application router with the given pool and extractor.
///
/// Mirrors the production router construction so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app_with_extractor(
    pool: PgPool,
    extractor: Arc<dyn BrainDumpExtractor>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        extractor,
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
