// ABOUTME: Integration tests for the coaching skill route handlers
// ABOUTME: Tests listing, creation, uniqueness conflicts, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_app;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn list_is_empty_on_fresh_database() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/api/coaches/skill").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn create_and_list_skill() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::post("/api/coaches/skill")
        .json(&json!({ "name": "瑜伽" }))
        .send(app.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "瑜伽");
    assert!(body["data"]["id"].as_str().is_some());

    let list = AxumTestRequest::get("/api/coaches/skill").send(app).await;
    let list_body: Value = list.json();
    let skills = list_body["data"].as_array().unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0]["name"], "瑜伽");
}

#[tokio::test]
async fn create_rejects_invalid_name() {
    let (app, _resources) = create_test_app().await.unwrap();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": 7 })] {
        let response = AxumTestRequest::post("/api/coaches/skill")
            .json(&body)
            .send(app.clone())
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let envelope: Value = response.json();
        assert_eq!(envelope["status"], "failed");
        assert_eq!(envelope["message"], "欄位未填寫正確");
    }
}

#[tokio::test]
async fn create_duplicate_name_conflicts() {
    let (app, _resources) = create_test_app().await.unwrap();

    let first = AxumTestRequest::post("/api/coaches/skill")
        .json(&json!({ "name": "重訓" }))
        .send(app.clone())
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = AxumTestRequest::post("/api/coaches/skill")
        .json(&json!({ "name": "重訓" }))
        .send(app.clone())
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let envelope: Value = second.json();
    assert_eq!(envelope["message"], "資料重複");

    let list = AxumTestRequest::get("/api/coaches/skill").send(app).await;
    let list_body: Value = list.json();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_round_trip() {
    let (app, _resources) = create_test_app().await.unwrap();

    let created = AxumTestRequest::post("/api/coaches/skill")
        .json(&json!({ "name": "游泳" }))
        .send(app.clone())
        .await;
    let created_body: Value = created.json();
    let id = created_body["data"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::delete(&format!("/api/coaches/skill/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // A second delete targets nothing
    let again = AxumTestRequest::delete(&format!("/api/coaches/skill/{id}"))
        .send(app)
        .await;
    assert_eq!(again.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = again.json();
    assert_eq!(envelope["message"], "ID錯誤");
}
