// ABOUTME: Integration tests for the database managers
// ABOUTME: Tests manager CRUD surfaces and the transactional coach promotion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coach_platform_api::{
    database::{CreateCreditPackageRequest, CreateSkillRequest, PromoteToCoachRequest},
    models::UserRole,
};
use common::{create_test_resources, create_test_user};

#[tokio::test]
async fn credit_package_crud_round_trip() {
    let resources = create_test_resources().await.unwrap();
    let manager = resources.database.credit_packages();

    let package = manager
        .create(&CreateCreditPackageRequest {
            name: "Pack A".to_owned(),
            credit_amount: 10,
            price: 100,
        })
        .await
        .unwrap();

    let found = manager.find_by_name("Pack A").await.unwrap().unwrap();
    assert_eq!(found.id, package.id);
    assert_eq!(found.credit_amount, 10);
    assert_eq!(found.price, 100);

    assert!(manager.find_by_name("Pack B").await.unwrap().is_none());

    let affected = manager.delete(&package.id.to_string()).await.unwrap();
    assert_eq!(affected, 1);
    let affected = manager.delete(&package.id.to_string()).await.unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn duplicate_package_insert_hits_unique_constraint() {
    let resources = create_test_resources().await.unwrap();
    let manager = resources.database.credit_packages();

    let request = CreateCreditPackageRequest {
        name: "Pack A".to_owned(),
        credit_amount: 10,
        price: 100,
    };
    manager.create(&request).await.unwrap();

    // Handlers check uniqueness first; the constraint is the backstop for
    // racing inserts
    assert!(manager.create(&request).await.is_err());
}

#[tokio::test]
async fn skill_crud_round_trip() {
    let resources = create_test_resources().await.unwrap();
    let manager = resources.database.skills();

    let skill = manager
        .create(&CreateSkillRequest {
            name: "瑜伽".to_owned(),
        })
        .await
        .unwrap();

    let all = manager.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "瑜伽");

    assert_eq!(manager.delete(&skill.id.to_string()).await.unwrap(), 1);
    assert!(manager.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn promotion_updates_role_and_creates_profile() {
    let resources = create_test_resources().await.unwrap();
    let user = create_test_user(&resources, "小美", UserRole::User)
        .await
        .unwrap();

    let (promoted, coach) = resources
        .database
        .users()
        .promote_to_coach(
            &user.id.to_string(),
            &PromoteToCoachRequest {
                experience_years: 3,
                description: "核心訓練".to_owned(),
                profile_image_url: Some("https://cdn.example.com/a.png".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(promoted.role, UserRole::Coach);
    assert_eq!(coach.user_id, user.id);
    assert_eq!(coach.experience_years, 3);

    // The role change is visible on re-read
    let reread = resources
        .database
        .users()
        .find_by_id(&user.id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.role, UserRole::Coach);
}

#[tokio::test]
async fn promotion_of_unknown_user_creates_nothing() {
    let resources = create_test_resources().await.unwrap();

    let result = resources
        .database
        .users()
        .promote_to_coach(
            "c0b7f7be-8d53-4dfe-9f44-9d7c3a7f1e2d",
            &PromoteToCoachRequest {
                experience_years: 1,
                description: "查無此人".to_owned(),
                profile_image_url: None,
            },
        )
        .await;
    assert!(result.is_err());

    let coaches = resources.database.coaches().list(10, 1).await.unwrap();
    assert!(coaches.is_empty());
}

#[tokio::test]
async fn promotion_twice_keeps_single_profile() {
    let resources = create_test_resources().await.unwrap();
    let user = create_test_user(&resources, "小華", UserRole::User)
        .await
        .unwrap();
    let users = resources.database.users();

    let request = PromoteToCoachRequest {
        experience_years: 2,
        description: "游泳".to_owned(),
        profile_image_url: None,
    };
    users
        .promote_to_coach(&user.id.to_string(), &request)
        .await
        .unwrap();

    // Second promotion fails the in-transaction role check
    let second = users.promote_to_coach(&user.id.to_string(), &request).await;
    assert!(second.is_err());

    let coaches = resources.database.coaches().list(10, 1).await.unwrap();
    assert_eq!(coaches.len(), 1);
}
