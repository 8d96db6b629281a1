// ABOUTME: Core database management with schema setup for SQLite
// ABOUTME: Owns the connection pool and hands out per-entity managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Database connection and schema management
//!
//! The [`Database`] handle wraps a sqlx SQLite pool with explicit lifecycle:
//! opened (and migrated) once at startup, cloned cheaply into each route
//! group, closed when the process exits. Per-entity managers expose the
//! find/create/update/delete surface the handlers consume.

/// Coach profile storage and listing
pub mod coaches;
/// Course storage and management
pub mod courses;
/// Credit package storage and management
pub mod credit_packages;
/// Skill storage and management
pub mod skills;
/// User account lookup and role promotion
pub mod users;

pub use coaches::{CoachListItem, CoachManager};
pub use courses::{CourseManager, CreateCourseRequest, UpdateCourseRequest};
pub use credit_packages::{CreateCreditPackageRequest, CreditPackageManager};
pub use skills::{CreateSkillRequest, SkillManager};
pub use users::{PromoteToCoachRequest, UserManager};

use crate::errors::{AppError, AppResult};
use sqlx::SqlitePool;
use tracing::info;

/// Database connection pool with explicit lifecycle
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a database connection and run schema migration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the database URL is invalid or malformed
    /// - the connection fails
    /// - `SQLite` file creation fails
    /// - the migration process fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };

        db.migrate()
            .await
            .map_err(|e| AppError::database(format!("Database migration failed: {e}")))?;

        info!("Database schema ready");
        Ok(db)
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Credit package manager bound to this pool
    #[must_use]
    pub fn credit_packages(&self) -> CreditPackageManager {
        CreditPackageManager::new(self.pool.clone())
    }

    /// Skill manager bound to this pool
    #[must_use]
    pub fn skills(&self) -> SkillManager {
        SkillManager::new(self.pool.clone())
    }

    /// User manager bound to this pool
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Coach manager bound to this pool
    #[must_use]
    pub fn coaches(&self) -> CoachManager {
        CoachManager::new(self.pool.clone())
    }

    /// Course manager bound to this pool
    #[must_use]
    pub fn courses(&self) -> CourseManager {
        CourseManager::new(self.pool.clone())
    }

    /// Create tables when they don't exist yet
    async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                role TEXT NOT NULL DEFAULT 'USER',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS credit_packages (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                credit_amount INTEGER NOT NULL,
                price INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS skills (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS coaches (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL UNIQUE REFERENCES users(id),
                experience_years INTEGER NOT NULL,
                description TEXT NOT NULL,
                profile_image_url TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS courses (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                skill_id TEXT NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                start_at TEXT NOT NULL,
                end_at TEXT NOT NULL,
                max_participants INTEGER NOT NULL,
                meeting_url TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Parse an RFC 3339 timestamp column value
///
/// # Errors
///
/// Returns an error if the stored value is not valid RFC 3339
pub(crate) fn parse_timestamp(s: &str) -> AppResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime in database: {e}")))
}

/// Parse a UUID column value
///
/// # Errors
///
/// Returns an error if the stored value is not a valid UUID
pub(crate) fn parse_uuid(s: &str) -> AppResult<uuid::Uuid> {
    uuid::Uuid::parse_str(s)
        .map_err(|e| AppError::internal(format!("Invalid UUID in database: {e}")))
}
