// ABOUTME: HTTP middleware module organization
// ABOUTME: Provides CORS configuration for the admin panel clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! HTTP middleware

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
