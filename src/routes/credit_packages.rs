// ABOUTME: Route handlers for the credit package REST API
// ABOUTME: Provides list, create-with-uniqueness-check, and delete endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Credit package routes

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
    constants::messages,
    database::CreateCreditPackageRequest,
    errors::AppError,
    models::CreditPackage,
    server::ServerResources,
    validation::{require_integer, require_string},
};

use super::{success_ack, success_data};

/// Credit package as returned by the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CreditPackageResponse {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Number of credits in the bundle
    pub credit_amount: i64,
    /// Price of the bundle
    pub price: i64,
}

impl From<CreditPackage> for CreditPackageResponse {
    fn from(package: CreditPackage) -> Self {
        Self {
            id: package.id,
            name: package.name,
            credit_amount: package.credit_amount,
            price: package.price,
        }
    }
}

/// Validated body for creating a credit package
#[derive(Debug)]
struct CreateCreditPackageBody {
    name: String,
    credit_amount: i64,
    price: i64,
}

impl CreateCreditPackageBody {
    /// Build from a raw JSON body, collecting every offending field name
    fn from_value(body: &Value) -> Result<Self, Vec<&'static str>> {
        let mut invalid = Vec::new();
        let name = require_string(body, "name", &mut invalid);
        let credit_amount = require_integer(body, "credit_amount", &mut invalid);
        let price = require_integer(body, "price", &mut invalid);

        if invalid.is_empty() {
            Ok(Self {
                name,
                credit_amount,
                price,
            })
        } else {
            Err(invalid)
        }
    }
}

/// Credit package routes handler
pub struct CreditPackageRoutes;

impl CreditPackageRoutes {
    /// Create all credit package routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/credit-package",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/credit-package/:creditPackageId",
                delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/credit-package - list all packages
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let packages = resources.database.credit_packages().find_all().await?;
        let packages: Vec<CreditPackageResponse> =
            packages.into_iter().map(Into::into).collect();

        Ok(success_data(StatusCode::OK, &packages))
    }

    /// Handle POST /api/credit-package - create a package with a unique name
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        // A missing or unparseable body fails field validation like any other
        // malformed input
        let body = body.map_or(Value::Null, |Json(value)| value);
        let body = CreateCreditPackageBody::from_value(&body).map_err(|fields| {
            warn!("Credit package create rejected, invalid fields: {fields:?}");
            AppError::invalid_fields()
        })?;

        let manager = resources.database.credit_packages();
        if manager.find_by_name(&body.name).await?.is_some() {
            warn!("Credit package name already exists: {}", body.name);
            return Err(AppError::conflict());
        }

        let package = manager
            .create(&CreateCreditPackageRequest {
                name: body.name,
                credit_amount: body.credit_amount,
                price: body.price,
            })
            .await?;

        Ok(success_data(StatusCode::OK, &package))
    }

    /// Handle DELETE /api/credit-package/:creditPackageId
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(package_id): Path<String>,
    ) -> Result<Response, AppError> {
        if package_id.trim().is_empty() {
            warn!("Credit package delete rejected, blank id");
            return Err(AppError::invalid_input(messages::INVALID_ID));
        }

        let affected = resources
            .database
            .credit_packages()
            .delete(&package_id)
            .await?;
        if affected == 0 {
            warn!("Credit package delete matched no row: {package_id}");
            return Err(AppError::invalid_input(messages::INVALID_ID));
        }

        Ok(success_ack())
    }
}
