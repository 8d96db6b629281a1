// ABOUTME: Route module organization for the Coach Platform HTTP endpoints
// ABOUTME: Provides route definitions organized by domain plus shared envelope helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Route module for the Coach Platform API
//!
//! Routes are organized by domain; each module exposes a `Routes` struct
//! whose `routes()` constructor returns an axum `Router` wired to the shared
//! server resources. Handlers are thin: validate, consult a manager, respond.

/// Admin routes for course management and coach promotion
pub mod admin;
/// Public coach directory routes
pub mod coaches;
/// Credit package routes
pub mod credit_packages;
/// Health check and system status routes
pub mod health;
/// Coaching skill routes
pub mod skills;

pub use admin::AdminRoutes;
pub use coaches::CoachRoutes;
pub use credit_packages::CreditPackageRoutes;
pub use health::HealthRoutes;
pub use skills::SkillRoutes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Success envelope with a data payload
pub(crate) fn success_data<T: Serialize>(status: StatusCode, data: &T) -> Response {
    (
        status,
        Json(json!({
            "status": "success",
            "data": data,
        })),
    )
        .into_response()
}

/// Bare success acknowledgement (no data field)
pub(crate) fn success_ack() -> Response {
    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
}
