// ABOUTME: Public coach directory route handlers
// ABOUTME: Provides the paginated coach listing and single-coach detail endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Coach directory routes

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    constants::{messages, pagination},
    errors::AppError,
    server::ServerResources,
};

use super::success_data;

/// Query parameters for the coach listing
///
/// `per`/`page` arrive as raw strings; non-numeric or non-positive values
/// fall back to the defaults rather than failing the request.
#[derive(Debug, Deserialize, Default)]
pub struct ListCoachesQuery {
    /// Page size
    pub per: Option<String>,
    /// Page number, 1-based
    pub page: Option<String>,
}

impl ListCoachesQuery {
    fn per(&self) -> u32 {
        parse_positive(self.per.as_deref()).unwrap_or(pagination::DEFAULT_PER)
    }

    fn page(&self) -> u32 {
        parse_positive(self.page.as_deref()).unwrap_or(pagination::DEFAULT_PAGE)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value.and_then(|s| s.parse::<u32>().ok()).filter(|n| *n > 0)
}

/// Coach directory routes handler
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create all coach directory routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/coaches", get(Self::handle_list))
            .route("/api/coaches/:coachId", get(Self::handle_detail))
            .with_state(resources)
    }

    /// Handle GET /api/coaches - paginated coach listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListCoachesQuery>,
    ) -> Result<Response, AppError> {
        let coaches = resources
            .database
            .coaches()
            .list(query.per(), query.page())
            .await?;

        Ok(success_data(StatusCode::OK, &coaches))
    }

    /// Handle GET /api/coaches/:coachId - coach profile with the owning user
    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Path(coach_id): Path<String>,
    ) -> Result<Response, AppError> {
        let coach = resources.database.coaches().find_by_id(&coach_id).await?;
        let Some(coach) = coach else {
            warn!("Coach detail requested for unknown coach: {coach_id}");
            return Err(AppError::not_found(messages::COACH_NOT_FOUND));
        };

        let user = resources
            .database
            .users()
            .find_by_id(&coach.user_id.to_string())
            .await?;
        let Some(user) = user else {
            warn!("Coach {coach_id} has no backing user row");
            return Err(AppError::not_found(messages::COACH_NOT_FOUND));
        };

        Ok(success_data(
            StatusCode::OK,
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
