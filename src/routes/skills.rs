// ABOUTME: Route handlers for the coaching skill REST API
// ABOUTME: Provides list, create-with-uniqueness-check, and delete endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Coaching skill routes
//!
//! Mounted under `/api/coaches/skill`: the admin panel manages the skill
//! catalog coaches pick their courses from.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::{
    constants::messages, database::CreateSkillRequest, errors::AppError, models::Skill,
    server::ServerResources, validation::require_string,
};

use super::{success_ack, success_data};

/// Skill as returned by the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SkillResponse {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
        }
    }
}

/// Validated body for creating a skill
#[derive(Debug)]
struct CreateSkillBody {
    name: String,
}

impl CreateSkillBody {
    fn from_value(body: &Value) -> Result<Self, Vec<&'static str>> {
        let mut invalid = Vec::new();
        let name = require_string(body, "name", &mut invalid);

        if invalid.is_empty() {
            Ok(Self { name })
        } else {
            Err(invalid)
        }
    }
}

/// Skill routes handler
pub struct SkillRoutes;

impl SkillRoutes {
    /// Create all skill routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/coaches/skill",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/coaches/skill/:skillId", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/coaches/skill - list all skills
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let skills = resources.database.skills().find_all().await?;
        let skills: Vec<SkillResponse> = skills.into_iter().map(Into::into).collect();

        Ok(success_data(StatusCode::OK, &skills))
    }

    /// Handle POST /api/coaches/skill - create a skill with a unique name
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let body = body.map_or(Value::Null, |Json(value)| value);
        let body = CreateSkillBody::from_value(&body).map_err(|fields| {
            warn!("Skill create rejected, invalid fields: {fields:?}");
            AppError::invalid_fields()
        })?;

        let manager = resources.database.skills();
        if manager.find_by_name(&body.name).await?.is_some() {
            warn!("Skill name already exists: {}", body.name);
            return Err(AppError::conflict());
        }

        let skill = manager.create(&CreateSkillRequest { name: body.name }).await?;

        Ok(success_data(StatusCode::OK, &skill))
    }

    /// Handle DELETE /api/coaches/skill/:skillId
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(skill_id): Path<String>,
    ) -> Result<Response, AppError> {
        if skill_id.trim().is_empty() {
            warn!("Skill delete rejected, blank id");
            return Err(AppError::invalid_input(messages::INVALID_ID));
        }

        let affected = resources.database.skills().delete(&skill_id).await?;
        if affected == 0 {
            warn!("Skill delete matched no row: {skill_id}");
            return Err(AppError::invalid_input(messages::INVALID_ID));
        }

        Ok(success_ack())
    }
}
