// ABOUTME: Unified error handling system with standard error codes and HTTP responses
// ABOUTME: Maps validation, conflict, not-found, and internal failures to the JSON envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Unified error handling
//!
//! Every failure a handler can produce is an [`AppError`] carrying an
//! [`ErrorCode`]. The code decides the HTTP status and which envelope
//! (`failed` vs `error`) the client sees; the message is the client-facing
//! text. Internal detail never reaches the response body - callers log it
//! before constructing the error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use thiserror::Error;

use crate::constants::messages;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request field validation failed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A referenced or targeted entity does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A unique field already holds the submitted value
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,
    /// Datastore operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Configuration is missing or invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unexpected runtime failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    ///
    /// Business-level not-found is reported as 400 in this API; HTTP 404 is
    /// reserved for the router fallback on unmatched paths.
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::ResourceNotFound => StatusCode::BAD_REQUEST,
            Self::ResourceAlreadyExists => StatusCode::CONFLICT,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Envelope `status` discriminator: `failed` for client errors, `error`
    /// for server errors
    #[must_use]
    pub const fn envelope_status(self) -> &'static str {
        match self {
            Self::InvalidInput | Self::ResourceNotFound | Self::ResourceAlreadyExists => "failed",
            Self::DatabaseError | Self::ConfigError | Self::InternalError => "error",
        }
    }

    /// Whether this code represents an unexpected server-side failure
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        matches!(
            self,
            Self::DatabaseError | Self::ConfigError | Self::InternalError
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code deciding status and envelope
    pub code: ErrorCode,
    /// Client-facing message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Validation failure with a caller-provided message
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Validation failure with the standard field-validation message
    #[must_use]
    pub fn invalid_fields() -> Self {
        Self::new(ErrorCode::InvalidInput, messages::INVALID_FIELDS)
    }

    /// A referenced or targeted entity is missing
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Duplicate value on a unique field
    #[must_use]
    pub fn conflict() -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, messages::DUPLICATE_DATA)
    }

    /// Datastore failure; `detail` is logged by the caller, the client sees
    /// the generic server-error message
    #[must_use]
    pub fn database(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!(target: "coach_platform_api::database", "{detail}");
        Self::new(ErrorCode::DatabaseError, messages::SERVER_ERROR)
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected runtime failure; detail is logged, the client sees the
    /// generic server-error message
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!(target: "coach_platform_api", "{detail}");
        Self::new(ErrorCode::InternalError, messages::SERVER_ERROR)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::database(format!("Database operation failed: {err}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({
            "status": self.code.envelope_status(),
            "message": self.message,
        });
        (self.code.http_status(), Json(body)).into_response()
    }
}
