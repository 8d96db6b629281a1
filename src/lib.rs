// ABOUTME: Main library entry point for the Coach Platform admin API
// ABOUTME: Provides the REST endpoints backing the coaching-platform admin panel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

#![deny(unsafe_code)]

//! # Coach Platform API
//!
//! HTTP JSON API backing a coaching-platform admin panel: CRUD endpoints for
//! credit packages, skills, courses, and user-to-coach promotion over a
//! SQLite datastore.
//!
//! ## Architecture
//!
//! - **Validators**: pure field predicates over raw JSON bodies
//! - **Managers**: per-entity persistence handles over a shared sqlx pool
//! - **Routes**: one axum route group per domain; thin handlers that
//!   validate, consult a manager, and write the JSON envelope
//! - **Server**: router assembly with CORS, request tracing, and the 404
//!   fallback
//!
//! ## Example
//!
//! ```rust,no_run
//! use coach_platform_api::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Coach Platform API configured: {}", config.summary());
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and the client-facing message catalog
pub mod constants;

/// Database connection, schema, and per-entity managers
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Common data models
pub mod models;

/// `HTTP` routes for the admin panel endpoints
pub mod routes;

/// Server resources, router assembly, and serve loop
pub mod server;

/// Request field validators
pub mod validation;
