// ABOUTME: HTTP server assembly: shared resources, router merge, and serve loop
// ABOUTME: Mounts all route groups with CORS, tracing, and the 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Server assembly
//!
//! [`ServerResources`] owns the explicitly constructed database handle and
//! configuration; route groups receive it by `Arc`. The router is built once
//! and served on the configured port until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    config::ServerConfig,
    constants::messages,
    database::Database,
    middleware::setup_cors,
    routes::{AdminRoutes, CoachRoutes, CreditPackageRoutes, HealthRoutes, SkillRoutes},
};

/// Shared resources handed to every route group
pub struct ServerResources {
    /// Database handle, opened at startup
    pub database: Database,
    /// Server configuration loaded from the environment
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the database handle and configuration
    #[must_use]
    pub const fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self { database, config }
    }
}

/// Build the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CreditPackageRoutes::routes(Arc::clone(&resources)))
        .merge(SkillRoutes::routes(Arc::clone(&resources)))
        .merge(AdminRoutes::routes(Arc::clone(&resources)))
        .merge(CoachRoutes::routes(resources))
        .fallback(handle_route_not_found)
        .layer(middleware::from_fn(unify_unmatched_methods))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Fallback for requests matching no route
async fn handle_route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "failed",
            "message": messages::ROUTE_NOT_FOUND,
        })),
    )
        .into_response()
}

/// Normalize dispatch edge cases to the routing contract
///
/// OPTIONS succeeds with an empty body on every path (the CORS layer answers
/// preflight-shaped requests before this runs; this covers bare OPTIONS).
/// An unknown method on a known path is treated the same as an unknown path.
async fn unify_unmatched_methods(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    let response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return handle_route_not_found().await;
    }
    response
}

/// Bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let router = build_router(resources);

    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, stopping server");
}
