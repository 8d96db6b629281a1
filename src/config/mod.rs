// ABOUTME: Configuration module organization
// ABOUTME: Re-exports the environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
