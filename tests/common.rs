// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, router, and seed-data helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

//! Shared test utilities for `coach_platform_api`
//!
//! Common setup functions to reduce duplication across integration tests.
//! Every test runs against its own in-memory SQLite database.

use anyhow::Result;
use coach_platform_api::{
    config::{CorsConfig, DatabaseUrl, Environment, LogLevel, ServerConfig},
    database::Database,
    models::{User, UserRole},
    server::{build_router, ServerResources},
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Test configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        database_url: DatabaseUrl::Memory,
        cors: CorsConfig::default(),
    }
}

/// Standard test resources: fresh in-memory database plus test config
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let config = test_config();
    let database = Database::new(&config.database_url.to_connection_string())
        .await
        .map_err(|e| anyhow::anyhow!("test database setup failed: {e}"))?;
    Ok(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// Full application router over fresh test resources
pub async fn create_test_app() -> Result<(axum::Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    let router = build_router(Arc::clone(&resources));
    Ok((router, resources))
}

/// Insert a user with the given role and a unique email
pub async fn create_test_user(
    resources: &Arc<ServerResources>,
    name: &str,
    role: UserRole,
) -> Result<User> {
    let email = format!("{}@test.example.com", Uuid::new_v4().as_simple());
    resources
        .database
        .users()
        .create(name, &email, role)
        .await
        .map_err(|e| anyhow::anyhow!("test user setup failed: {e}"))
}

/// Insert a user and promote them, returning the coach profile id
pub async fn create_test_coach(
    resources: &Arc<ServerResources>,
    name: &str,
) -> Result<(User, Uuid)> {
    use coach_platform_api::database::PromoteToCoachRequest;

    let user = create_test_user(resources, name, UserRole::User).await?;
    let (user, coach) = resources
        .database
        .users()
        .promote_to_coach(
            &user.id.to_string(),
            &PromoteToCoachRequest {
                experience_years: 5,
                description: "seed coach".to_owned(),
                profile_image_url: None,
            },
        )
        .await
        .map_err(|e| anyhow::anyhow!("test coach setup failed: {e}"))?;
    Ok((user, coach.id))
}
