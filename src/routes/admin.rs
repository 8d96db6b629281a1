// ABOUTME: Admin route handlers for course management and coach promotion
// ABOUTME: Handles course create/edit and the user-to-coach role change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Admin routes
//!
//! Course creation and editing plus the role-change endpoint that promotes a
//! user to coach. Every handler follows the same linear contract: validate
//! the typed body, check the referenced entities, perform one mutation,
//! re-fetch and respond.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    constants::messages,
    database::{CreateCourseRequest, PromoteToCoachRequest, UpdateCourseRequest},
    errors::AppError,
    models::UserRole,
    server::ServerResources,
    validation::{is_not_valid_string, is_valid_https_url, require_integer, require_string},
};

use super::success_data;

/// Validated body for creating a course
#[derive(Debug)]
struct CreateCourseBody {
    user_id: String,
    skill_id: String,
    name: String,
    description: String,
    start_at: String,
    end_at: String,
    max_participants: i64,
    meeting_url: String,
}

impl CreateCourseBody {
    fn from_value(body: &Value) -> Result<Self, Vec<&'static str>> {
        let mut invalid = Vec::new();
        let user_id = require_string(body, "user_id", &mut invalid);
        let skill_id = require_string(body, "skill_id", &mut invalid);
        let name = require_string(body, "name", &mut invalid);
        let description = require_string(body, "description", &mut invalid);
        let start_at = require_string(body, "start_at", &mut invalid);
        let end_at = require_string(body, "end_at", &mut invalid);
        let max_participants = require_integer(body, "max_participants", &mut invalid);
        let meeting_url = require_string(body, "meeting_url", &mut invalid);
        if !meeting_url.is_empty() && !is_valid_https_url(&meeting_url) {
            invalid.push("meeting_url");
        }

        if invalid.is_empty() {
            Ok(Self {
                user_id,
                skill_id,
                name,
                description,
                start_at,
                end_at,
                max_participants,
                meeting_url,
            })
        } else {
            Err(invalid)
        }
    }
}

/// Validated body for editing a course; every editable field is required
#[derive(Debug)]
struct EditCourseBody {
    skill_id: String,
    name: String,
    description: String,
    start_at: String,
    end_at: String,
    max_participants: i64,
    meeting_url: String,
}

impl EditCourseBody {
    fn from_value(body: &Value) -> Result<Self, Vec<&'static str>> {
        let mut invalid = Vec::new();
        let skill_id = require_string(body, "skill_id", &mut invalid);
        let name = require_string(body, "name", &mut invalid);
        let description = require_string(body, "description", &mut invalid);
        let start_at = require_string(body, "start_at", &mut invalid);
        let end_at = require_string(body, "end_at", &mut invalid);
        let max_participants = require_integer(body, "max_participants", &mut invalid);
        let meeting_url = require_string(body, "meeting_url", &mut invalid);
        if !meeting_url.is_empty() && !is_valid_https_url(&meeting_url) {
            invalid.push("meeting_url");
        }

        if invalid.is_empty() {
            Ok(Self {
                skill_id,
                name,
                description,
                start_at,
                end_at,
                max_participants,
                meeting_url,
            })
        } else {
            Err(invalid)
        }
    }
}

/// Validated body for the role-change endpoint
#[derive(Debug)]
struct ChangeRoleBody {
    experience_years: i64,
    description: String,
    profile_image_url: Option<String>,
}

impl ChangeRoleBody {
    fn from_value(body: &Value) -> Result<Self, Vec<&'static str>> {
        let mut invalid = Vec::new();
        let experience_years = require_integer(body, "experience_years", &mut invalid);
        let description = require_string(body, "description", &mut invalid);

        // Optional field: absent or null is fine, anything else must be an
        // https URL string
        let image_value = body.get("profile_image_url");
        let profile_image_url = match image_value {
            None | Some(Value::Null) => None,
            Some(value) => {
                if is_not_valid_string(Some(value)) {
                    invalid.push("profile_image_url");
                    None
                } else {
                    let url = value.as_str().unwrap_or_default();
                    if is_valid_https_url(url) {
                        Some(url.to_owned())
                    } else {
                        invalid.push("profile_image_url");
                        None
                    }
                }
            }
        };

        if invalid.is_empty() {
            Ok(Self {
                experience_years,
                description,
                profile_image_url,
            })
        } else {
            Err(invalid)
        }
    }
}

/// Admin routes handler
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/admin/courses", post(Self::handle_create_course))
            .route(
                "/api/admin/courses/:courseId",
                patch(Self::handle_edit_course),
            )
            .route("/api/admin/coaches/:userId", post(Self::handle_change_role))
            .with_state(resources)
    }

    /// Handle POST /api/admin/courses - create a course for a coach
    async fn handle_create_course(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let body = body.map_or(Value::Null, |Json(value)| value);
        let body = CreateCourseBody::from_value(&body).map_err(|fields| {
            warn!("Course create rejected, invalid fields: {fields:?}");
            AppError::invalid_fields()
        })?;

        let user = resources.database.users().find_by_id(&body.user_id).await?;
        let Some(user) = user else {
            warn!("Course create references unknown user: {}", body.user_id);
            return Err(AppError::not_found(messages::USER_NOT_FOUND));
        };
        if user.role != UserRole::Coach {
            warn!("Course create references non-coach user: {}", body.user_id);
            return Err(AppError::invalid_input(messages::USER_NOT_COACH));
        }

        let manager = resources.database.courses();
        let course_id = manager
            .create(&CreateCourseRequest {
                user_id: body.user_id,
                skill_id: body.skill_id,
                name: body.name,
                description: body.description,
                start_at: body.start_at,
                end_at: body.end_at,
                max_participants: body.max_participants,
                meeting_url: body.meeting_url,
            })
            .await?;

        let course = manager
            .find_by_id(&course_id.to_string())
            .await?
            .ok_or_else(|| AppError::internal("Created course not found on re-fetch"))?;

        Ok(success_data(StatusCode::CREATED, &course))
    }

    /// Handle PATCH /api/admin/courses/:courseId - edit every course field
    async fn handle_edit_course(
        State(resources): State<Arc<ServerResources>>,
        Path(course_id): Path<String>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        if course_id.trim().is_empty() {
            warn!("Course edit rejected, blank id");
            return Err(AppError::invalid_fields());
        }
        let body = body.map_or(Value::Null, |Json(value)| value);
        let body = EditCourseBody::from_value(&body).map_err(|fields| {
            warn!("Course edit rejected, invalid fields: {fields:?}");
            AppError::invalid_fields()
        })?;

        let manager = resources.database.courses();
        if manager.find_by_id(&course_id).await?.is_none() {
            warn!("Course edit targets unknown course: {course_id}");
            return Err(AppError::not_found(messages::COURSE_NOT_FOUND));
        }

        let affected = manager
            .update(
                &course_id,
                &UpdateCourseRequest {
                    skill_id: body.skill_id,
                    name: body.name,
                    description: body.description,
                    start_at: body.start_at,
                    end_at: body.end_at,
                    max_participants: body.max_participants,
                    meeting_url: body.meeting_url,
                },
            )
            .await?;
        if affected == 0 {
            warn!("Course edit affected no rows: {course_id}");
            return Err(AppError::invalid_input(messages::COURSE_UPDATE_FAILED));
        }

        let course = manager
            .find_by_id(&course_id)
            .await?
            .ok_or_else(|| AppError::internal("Updated course not found on re-fetch"))?;

        Ok(success_data(StatusCode::OK, &json!({ "course": course })))
    }

    /// Handle POST /api/admin/coaches/:userId - promote a user to coach
    async fn handle_change_role(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let body = body.map_or(Value::Null, |Json(value)| value);
        let body = ChangeRoleBody::from_value(&body).map_err(|fields| {
            warn!("Role change rejected, invalid fields: {fields:?}");
            AppError::invalid_fields()
        })?;

        let users = resources.database.users();
        let user = users.find_by_id(&user_id).await?;
        let Some(user) = user else {
            warn!("Role change targets unknown user: {user_id}");
            return Err(AppError::not_found(messages::USER_NOT_FOUND));
        };
        if user.role == UserRole::Coach {
            warn!("Role change targets user already holding coach role: {user_id}");
            return Err(AppError::invalid_input(messages::USER_ALREADY_COACH));
        }

        let (user, coach) = users
            .promote_to_coach(
                &user_id,
                &PromoteToCoachRequest {
                    experience_years: body.experience_years,
                    description: body.description,
                    profile_image_url: body.profile_image_url,
                },
            )
            .await?;

        Ok(success_data(
            StatusCode::CREATED,
            &json!({
                "user": {
                    "name": user.name,
                    "role": user.role,
                },
                "coach": coach,
            }),
        ))
    }
}
