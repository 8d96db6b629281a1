// ABOUTME: Integration tests for the admin route handlers
// ABOUTME: Tests course creation/editing and the user-to-coach role change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use coach_platform_api::models::UserRole;
use common::{create_test_app, create_test_coach, create_test_user};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

fn course_body(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "skill_id": "d3d0f624-33fa-43fe-b014-5ad6f3a93c64",
        "name": "晨間瑜伽",
        "description": "一起來放鬆身心",
        "start_at": "2025-03-01T09:00:00+08:00",
        "end_at": "2025-03-01T10:00:00+08:00",
        "max_participants": 20,
        "meeting_url": "https://meet.example.com/yoga"
    })
}

// ============================================================================
// Course creation
// ============================================================================

#[tokio::test]
async fn create_course_for_coach_returns_created_record() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let response = AxumTestRequest::post("/api/admin/courses")
        .json(&course_body(&coach_user.id.to_string()))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "晨間瑜伽");
    assert_eq!(body["data"]["max_participants"], 20);
    assert_eq!(body["data"]["user_id"], coach_user.id.to_string());
    assert!(body["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn create_course_rejects_unknown_user() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::post("/api/admin/courses")
        .json(&course_body("2a1b7bfa-56f8-4d21-b2dc-d02c34a7a2e3"))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["status"], "failed");
    assert_eq!(envelope["message"], "使用者不存在");
}

#[tokio::test]
async fn create_course_rejects_user_without_coach_role() {
    let (app, resources) = create_test_app().await.unwrap();
    let user = create_test_user(&resources, "小明", UserRole::User)
        .await
        .unwrap();

    let response = AxumTestRequest::post("/api/admin/courses")
        .json(&course_body(&user.id.to_string()))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["message"], "使用者尚未成為教練");
}

#[tokio::test]
async fn create_course_rejects_non_https_meeting_url() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let mut body = course_body(&coach_user.id.to_string());
    body["meeting_url"] = json!("http://meet.example.com/yoga");

    let response = AxumTestRequest::post("/api/admin/courses")
        .json(&body)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["message"], "欄位未填寫正確");
}

#[tokio::test]
async fn create_course_rejects_missing_fields() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    for field in [
        "skill_id",
        "name",
        "description",
        "start_at",
        "end_at",
        "max_participants",
        "meeting_url",
    ] {
        let mut body = course_body(&coach_user.id.to_string());
        body.as_object_mut().unwrap().remove(field);

        let response = AxumTestRequest::post("/api/admin/courses")
            .json(&body)
            .send(app.clone())
            .await;

        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "missing {field} should be rejected"
        );
        let envelope: Value = response.json();
        assert_eq!(envelope["message"], "欄位未填寫正確");
    }
}

// ============================================================================
// Course editing
// ============================================================================

#[tokio::test]
async fn edit_course_updates_every_field() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let created = AxumTestRequest::post("/api/admin/courses")
        .json(&course_body(&coach_user.id.to_string()))
        .send(app.clone())
        .await;
    let created_body: Value = created.json();
    let course_id = created_body["data"]["id"].as_str().unwrap().to_owned();

    let mut update = course_body(&coach_user.id.to_string());
    update.as_object_mut().unwrap().remove("user_id");
    update["name"] = json!("夜間瑜伽");
    update["max_participants"] = json!(12);

    let response = AxumTestRequest::patch(&format!("/api/admin/courses/{course_id}"))
        .json(&update)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["course"]["name"], "夜間瑜伽");
    assert_eq!(body["data"]["course"]["max_participants"], 12);
    assert_eq!(body["data"]["course"]["id"], course_id);
}

#[tokio::test]
async fn edit_course_rejects_unknown_course() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let mut update = course_body(&coach_user.id.to_string());
    update.as_object_mut().unwrap().remove("user_id");

    let response =
        AxumTestRequest::patch("/api/admin/courses/05c7756b-fa7d-48b9-a41c-7e7b2f7ea41c")
            .json(&update)
            .send(app)
            .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["message"], "課程不存在");
}

#[tokio::test]
async fn edit_course_rejects_invalid_fields() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, _coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let created = AxumTestRequest::post("/api/admin/courses")
        .json(&course_body(&coach_user.id.to_string()))
        .send(app.clone())
        .await;
    let created_body: Value = created.json();
    let course_id = created_body["data"]["id"].as_str().unwrap().to_owned();

    let mut update = course_body(&coach_user.id.to_string());
    update.as_object_mut().unwrap().remove("user_id");
    update["max_participants"] = json!(-3);

    let response = AxumTestRequest::patch(&format!("/api/admin/courses/{course_id}"))
        .json(&update)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["message"], "欄位未填寫正確");
}

// ============================================================================
// Role change (user -> coach)
// ============================================================================

#[tokio::test]
async fn promote_eligible_user_returns_user_and_coach() {
    let (app, resources) = create_test_app().await.unwrap();
    let user = create_test_user(&resources, "小美", UserRole::User)
        .await
        .unwrap();

    let response = AxumTestRequest::post(&format!("/api/admin/coaches/{}", user.id))
        .json(&json!({
            "experience_years": 3,
            "description": "專長有氧與核心訓練",
            "profile_image_url": "https://cdn.example.com/avatar.png"
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["name"], "小美");
    assert_eq!(body["data"]["user"]["role"], "COACH");
    assert_eq!(body["data"]["coach"]["experience_years"], 3);
    assert_eq!(
        body["data"]["coach"]["profile_image_url"],
        "https://cdn.example.com/avatar.png"
    );
    assert_eq!(body["data"]["coach"]["user_id"], user.id.to_string());

    // The coach profile row exists
    let coach = resources
        .database
        .coaches()
        .find_by_user_id(&user.id.to_string())
        .await
        .unwrap();
    assert!(coach.is_some());
}

#[tokio::test]
async fn promote_without_image_defaults_to_none() {
    let (app, resources) = create_test_app().await.unwrap();
    let user = create_test_user(&resources, "阿強", UserRole::User)
        .await
        .unwrap();

    let response = AxumTestRequest::post(&format!("/api/admin/coaches/{}", user.id))
        .json(&json!({ "experience_years": 0, "description": "新手教練" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["coach"]["profile_image_url"], Value::Null);
}

#[tokio::test]
async fn promote_already_coach_fails_without_new_profile() {
    let (app, resources) = create_test_app().await.unwrap();
    let (coach_user, coach_id) = create_test_coach(&resources, "芳如").await.unwrap();

    let response = AxumTestRequest::post(&format!("/api/admin/coaches/{}", coach_user.id))
        .json(&json!({ "experience_years": 9, "description": "再次申請" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["status"], "failed");
    assert_eq!(envelope["message"], "使用者已經是教練");

    // The original profile is untouched
    let coach = resources
        .database
        .coaches()
        .find_by_user_id(&coach_user.id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(coach.id, coach_id);
    assert_eq!(coach.experience_years, 5);
}

#[tokio::test]
async fn promote_unknown_user_fails() {
    let (app, _resources) = create_test_app().await.unwrap();

    let response = AxumTestRequest::post("/api/admin/coaches/9f2c6f7e-bb0a-4b73-9b1f-0f0a2a2f5a11")
        .json(&json!({ "experience_years": 3, "description": "查無此人" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let envelope: Value = response.json();
    assert_eq!(envelope["message"], "使用者不存在");
}

#[tokio::test]
async fn promote_rejects_invalid_fields() {
    let (app, resources) = create_test_app().await.unwrap();
    let user = create_test_user(&resources, "小華", UserRole::User)
        .await
        .unwrap();

    let bad_bodies = [
        json!({ "description": "缺年資" }),
        json!({ "experience_years": -1, "description": "負的年資" }),
        json!({ "experience_years": 3, "description": "" }),
        json!({
            "experience_years": 3,
            "description": "圖片網址錯誤",
            "profile_image_url": "http://cdn.example.com/avatar.png"
        }),
        json!({
            "experience_years": 3,
            "description": "圖片不是字串",
            "profile_image_url": 123
        }),
    ];

    for body in bad_bodies {
        let response = AxumTestRequest::post(&format!("/api/admin/coaches/{}", user.id))
            .json(&body)
            .send(app.clone())
            .await;

        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "body should be rejected: {body}"
        );
        let envelope: Value = response.json();
        assert_eq!(envelope["message"], "欄位未填寫正確");
    }

    // No coach row was created along the way
    let coach = resources
        .database
        .coaches()
        .find_by_user_id(&user.id.to_string())
        .await
        .unwrap();
    assert!(coach.is_none());
}
