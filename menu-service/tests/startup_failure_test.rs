//! The listener comes up even when the database client cannot be created;
//! requests then fail one by one with the status of their endpoint.

mod common;

use common::{test_config, TestApp};
use menu_service::config::StoreBackend;
use mongodb::bson::oid::ObjectId;
use reqwest::StatusCode;
use serde_json::json;

async fn spawn_with_bad_uri() -> TestApp {
    TestApp::spawn_with_config(test_config(
        StoreBackend::Mongo,
        Some("not-a-mongodb-uri"),
        None,
    ))
    .await
}

#[tokio::test]
async fn create_fails_with_500() {
    let app = spawn_with_bad_uri().await;

    let response = app.post_menu(&json!({"name": "Pizza", "price": 9.5})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Error adding a new item: database unavailable"));
}

#[tokio::test]
async fn validation_still_runs_before_the_store() {
    let app = spawn_with_bad_uri().await;

    let response = app.post_menu(&json!({"description": "no name"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete_fail_with_400() {
    let app = spawn_with_bad_uri().await;
    let id = ObjectId::new().to_hex();

    let response = app.put_menu(&id, &json!({"price": 5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().starts_with("Error: "));

    let response = app.delete_menu(&id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_uri_behaves_like_an_unreachable_database() {
    let app = TestApp::spawn_with_config(test_config(StoreBackend::Mongo, None, None)).await;

    let response = app.post_menu(&json!({"name": "Pizza", "price": 9.5})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text().await.unwrap(),
        "Error adding a new item: database unavailable: MONGO_URI is not set"
    );
}
