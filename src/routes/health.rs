// ABOUTME: Health check route handlers
// ABOUTME: Reports service liveness and datastore reachability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Health check routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::AppError, server::ServerResources};

use super::success_data;

/// Health check payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Overall status ("ok" or "degraded")
    pub status: String,
    /// Whether the datastore answered a probe query
    pub database_connected: bool,
    /// Response timestamp
    pub timestamp: String,
}

/// Health check routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let database_connected = sqlx::query("SELECT 1")
            .fetch_one(resources.database.pool())
            .await
            .is_ok();

        let response = HealthResponse {
            service: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            status: if database_connected { "ok" } else { "degraded" }.to_owned(),
            database_connected,
            timestamp: Utc::now().to_rfc3339(),
        };

        Ok(success_data(StatusCode::OK, &response))
    }
}
