//! Service info and health endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn root_returns_service_info(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "running");
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_reachable_db(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
