// ABOUTME: Database operations for coaching skills
// ABOUTME: Handles listing, name-uniqueness lookup, insert, and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::errors::{AppError, AppResult};
use crate::models::Skill;

/// Request to create a new skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkillRequest {
    /// Display name, unique across skills
    pub name: String,
}

/// Manager for skill persistence
pub struct SkillManager {
    pool: SqlitePool,
}

impl SkillManager {
    /// Create a new skill manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all skills
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_all(&self) -> AppResult<Vec<Skill>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, created_at
            FROM skills
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list skills: {e}")))?;

        rows.iter().map(row_to_skill).collect()
    }

    /// Find a skill by its unique name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Skill>> {
        let row = sqlx::query(
            r"
            SELECT id, name, created_at
            FROM skills
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up skill: {e}")))?;

        row.as_ref().map(row_to_skill).transpose()
    }

    /// Insert a new skill
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, request: &CreateSkillRequest) -> AppResult<Skill> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO skills (id, name, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(id.to_string())
        .bind(&request.name)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create skill: {e}")))?;

        Ok(Skill {
            id,
            name: request.name.clone(),
            created_at: now,
        })
    }

    /// Delete a skill by id, returning the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete skill: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_skill(row: &SqliteRow) -> AppResult<Skill> {
    let id_str: String = row.get("id");
    let name: String = row.get("name");
    let created_at_str: String = row.get("created_at");

    Ok(Skill {
        id: parse_uuid(&id_str)?,
        name,
        created_at: parse_timestamp(&created_at_str)?,
    })
}
