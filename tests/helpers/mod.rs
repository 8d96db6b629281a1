// ABOUTME: Test helper module organization
// ABOUTME: Exposes the axum request/response harness for integration tests
#![allow(dead_code)]

/// Axum HTTP testing utilities
pub mod axum_test;
