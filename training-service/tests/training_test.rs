//! Integration tests for the training endpoints.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_then_get_training() {
    let app = TestApp::spawn().await;
    let person_id = app.create_person("Maria").await;

    let training_id = app.create_training("T1", person_id).await;
    let (status, body) = app.get(&format!("/training/{}", training_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": training_id, "title": "T1", "person_id": person_id })
    );
}

#[tokio::test]
async fn get_unknown_training_returns_404() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/training/12345").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
}

#[tokio::test]
async fn list_returns_each_training_without_owner() {
    let app = TestApp::spawn().await;
    let person_id = app.create_person("Maria").await;
    let other_id = app.create_person("João").await;

    let first = app.create_training("First Aid", person_id).await;
    app.create_training("Forklift", other_id).await;
    let second = app.create_training("Fire Safety", person_id).await;

    let (status, body) = app.get(&format!("/person/{}/trainings", person_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "trainings": [
                { "id": first, "title": "First Aid" },
                { "id": second, "title": "Fire Safety" }
            ]
        })
    );
}

#[tokio::test]
async fn list_for_unknown_person_returns_404() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/person/777/trainings").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "none found");
}

#[tokio::test]
async fn training_for_unknown_person_is_accepted() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/training", json!({ "title": "Orphan", "person_id": 4242 }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn create_training_missing_fields_fails() {
    let app = TestApp::spawn().await;
    let person_id = app.create_person("Maria").await;

    let (status, _) = app
        .post("/training", json!({ "person_id": person_id }))
        .await;
    assert_ne!(status, StatusCode::OK);

    let (status, _) = app.post("/training", json!({ "title": "T1" })).await;
    assert_ne!(status, StatusCode::OK);

    let (status, _) = app.post("/training", json!({})).await;
    assert_ne!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_training_then_get_returns_404() {
    let app = TestApp::spawn().await;
    let person_id = app.create_person("Maria").await;
    let training_id = app.create_training("T1", person_id).await;

    let (status, body) = app.delete(&format!("/training/{}", training_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "deleted" }));

    let (status, _) = app.get(&format!("/training/{}", training_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_training_returns_ok() {
    let app = TestApp::spawn().await;

    let (status, body) = app.delete("/training/31337").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "deleted" }));
}

#[tokio::test]
async fn deleting_last_training_makes_list_404() {
    let app = TestApp::spawn().await;
    let person_id = app.create_person("Maria").await;
    let training_id = app.create_training("T1", person_id).await;

    app.delete(&format!("/training/{}", training_id)).await;

    let (status, _) = app.get(&format!("/person/{}/trainings", person_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn closed_database_yields_500() {
    let app = TestApp::spawn().await;
    app.db.close().await;

    let (status, body) = app.get("/training/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}
