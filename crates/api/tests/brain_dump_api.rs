//! HTTP-level tests for `/brain-dumps/`, with the extraction service stubbed.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, FailingExtractor, StubExtractor};
use offload_core::extraction::{
    ExtractedBrainDump, ExtractedCalendarEvent, ExtractedShoppingItem, ExtractedSubTask,
    ExtractedTask,
};
use offload_db::models::user::User;
use offload_db::repositories::UserRepo;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool) -> User {
    UserRepo::get_or_create(pool, "casey@example.com", Some("Casey"))
        .await
        .unwrap()
}

fn shopping_only(descriptions: &[&str]) -> ExtractedBrainDump {
    ExtractedBrainDump {
        shopping_items: descriptions
            .iter()
            .map(|d| ExtractedShoppingItem {
                description: (*d).to_string(),
            })
            .collect(),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn persists_every_extracted_shopping_item(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app_with_extractor(
        pool,
        Arc::new(StubExtractor(shopping_only(&[
            "Milk", "Eggs", "Bread", "Cheese",
        ]))),
    );

    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({
            "text": "Buy groceries: milk, eggs, bread, and cheese",
            "user_id": user.id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tasks"].as_array().unwrap().len(), 0);
    assert_eq!(json["calendar_events"].as_array().unwrap().len(), 0);

    let items = json["shopping_items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        assert!(item["id"].is_number());
        assert_eq!(item["user_id"].as_i64().unwrap(), user.id);
        assert_eq!(
            item["raw_input"],
            "Buy groceries: milk, eggs, bread, and cheese"
        );
        assert!(item["created_at"].is_string());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn decomposed_task_keeps_subtask_order_and_linkage(pool: PgPool) {
    let user = seed_user(&pool).await;
    let dump = ExtractedBrainDump {
        tasks: vec![ExtractedTask {
            description: "Organize school fundraiser".to_string(),
            due_date: Some("2026-10-20".to_string()),
            estimated_time_minutes: 240,
            should_decompose: true,
            reasoning: Some("Large multi-step project".to_string()),
            subtasks: vec![
                ExtractedSubTask {
                    description: "Recruit volunteers".to_string(),
                    estimated_time_minutes: Some(60),
                    due_date: None,
                    order: 1,
                },
                ExtractedSubTask {
                    description: "Book the gym".to_string(),
                    estimated_time_minutes: Some(30),
                    due_date: Some("2026-10-01".to_string()),
                    order: 2,
                },
                ExtractedSubTask {
                    description: "Print flyers".to_string(),
                    estimated_time_minutes: None,
                    due_date: None,
                    order: 3,
                },
            ],
        }],
        ..Default::default()
    };
    let app = common::build_test_app_with_extractor(pool, Arc::new(StubExtractor(dump)));

    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({"text": "fundraiser planning", "user_id": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let task = &json["tasks"][0];
    let task_id = task["id"].as_i64().unwrap();
    assert_eq!(task["due_date"], "2026-10-20");

    let subtasks = task["subtasks"].as_array().unwrap();
    assert_eq!(subtasks.len(), 3);
    for (i, subtask) in subtasks.iter().enumerate() {
        assert_eq!(subtask["order"].as_i64().unwrap(), i as i64 + 1);
        assert_eq!(subtask["parent_task_id"].as_i64().unwrap(), task_id);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mixed_dump_returns_all_categories(pool: PgPool) {
    let user = seed_user(&pool).await;
    let dump = ExtractedBrainDump {
        tasks: vec![ExtractedTask {
            description: "Call the school".to_string(),
            due_date: None,
            estimated_time_minutes: 10,
            should_decompose: false,
            reasoning: None,
            subtasks: vec![],
        }],
        shopping_items: vec![ExtractedShoppingItem {
            description: "Milk".to_string(),
        }],
        calendar_events: vec![ExtractedCalendarEvent {
            description: "Parent-teacher meeting".to_string(),
            event_date: "2026-09-15".to_string(),
            event_time: Some("17:00".to_string()),
        }],
    };
    let app = common::build_test_app_with_extractor(pool, Arc::new(StubExtractor(dump)));

    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({"text": "busy week", "user_id": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(json["tasks"][0]["subtasks"].as_array().unwrap().len(), 0);
    assert_eq!(json["shopping_items"].as_array().unwrap().len(), 1);
    assert_eq!(json["calendar_events"].as_array().unwrap().len(), 1);
    assert_eq!(json["calendar_events"][0]["event_time"], "17:00:00");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({"text": "anything", "user_id": 999999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_text_returns_400(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({"text": "   ", "user_id": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failing_extractor_returns_opaque_500_and_persists_nothing(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app_with_extractor(pool.clone(), Arc::new(FailingExtractor));

    let response = post_json(
        app,
        "/brain-dumps/",
        serde_json::json!({"text": "anything", "user_id": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "EXTRACTION_FAILED");
    // The upstream error text must not leak.
    assert!(!json["error"].as_str().unwrap().contains("model overloaded"));

    let tasks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(tasks, 0);
}
