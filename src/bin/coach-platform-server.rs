// ABOUTME: Server binary for the Coach Platform admin API
// ABOUTME: Loads configuration, opens the datastore, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! # Coach Platform API Server Binary
//!
//! Starts the admin-panel REST API: environment configuration, structured
//! logging, datastore connection (fatal on failure), then the HTTP listener.

use anyhow::Result;
use clap::Parser;
use coach_platform_api::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "coach-platform-server")]
#[command(about = "Coach Platform API - admin backend for the coaching platform")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading configuration, ignoring a missing file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = DatabaseUrl::parse_url(&database_url);
    }

    logging::init_from_env()?;

    info!("Starting Coach Platform API");
    info!("{}", config.summary());

    // Datastore connection failure is fatal; the process cannot serve
    let database = Database::new(&config.database_url.to_connection_string())
        .await
        .map_err(|e| anyhow::anyhow!("Database initialization failed: {e}"))?;
    info!("Database connected: {}", config.database_url);

    let resources = Arc::new(ServerResources::new(database, Arc::new(config.clone())));

    display_available_endpoints(&config);

    server::serve(resources).await
}

/// Display all available API endpoints with their port
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Credit Packages:");
    info!("   List:    GET    http://{host}:{port}/api/credit-package");
    info!("   Create:  POST   http://{host}:{port}/api/credit-package");
    info!("   Delete:  DELETE http://{host}:{port}/api/credit-package/{{creditPackageId}}");
    info!("Skills:");
    info!("   List:    GET    http://{host}:{port}/api/coaches/skill");
    info!("   Create:  POST   http://{host}:{port}/api/coaches/skill");
    info!("   Delete:  DELETE http://{host}:{port}/api/coaches/skill/{{skillId}}");
    info!("Admin:");
    info!("   Create Course: POST  http://{host}:{port}/api/admin/courses");
    info!("   Edit Course:   PATCH http://{host}:{port}/api/admin/courses/{{courseId}}");
    info!("   Promote Coach: POST  http://{host}:{port}/api/admin/coaches/{{userId}}");
    info!("Coaches:");
    info!("   List:    GET http://{host}:{port}/api/coaches");
    info!("   Detail:  GET http://{host}:{port}/api/coaches/{{coachId}}");
    info!("Monitoring:");
    info!("   Health:  GET http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
