// ABOUTME: Database operations for coach profiles
// ABOUTME: Handles profile lookup and the paginated coach directory listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::errors::{AppError, AppResult};
use crate::models::Coach;

/// Directory entry for the coach listing: coach id plus the user's name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachListItem {
    /// Coach profile id
    pub id: Uuid,
    /// Owning user's display name
    pub name: String,
}

/// Manager for coach profile persistence
pub struct CoachManager {
    pool: SqlitePool,
}

impl CoachManager {
    /// Create a new coach manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List coaches joined with their user names, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list(&self, per: u32, page: u32) -> AppResult<Vec<CoachListItem>> {
        let limit = i64::from(per);
        let offset = i64::from(per) * i64::from(page.saturating_sub(1));

        let rows = sqlx::query(
            r"
            SELECT coaches.id AS id, users.name AS name
            FROM coaches
            JOIN users ON users.id = coaches.user_id
            ORDER BY coaches.created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list coaches: {e}")))?;

        rows.iter()
            .map(|row| {
                let id_str: String = row.get("id");
                let name: String = row.get("name");
                Ok(CoachListItem {
                    id: parse_uuid(&id_str)?,
                    name,
                })
            })
            .collect()
    }

    /// Get a coach profile by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Coach>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, experience_years, description, profile_image_url,
                   created_at, updated_at
            FROM coaches
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get coach: {e}")))?;

        row.as_ref().map(row_to_coach).transpose()
    }

    /// Get a coach profile by the owning user's id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<Coach>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, experience_years, description, profile_image_url,
                   created_at, updated_at
            FROM coaches
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get coach by user: {e}")))?;

        row.as_ref().map(row_to_coach).transpose()
    }
}

fn row_to_coach(row: &SqliteRow) -> AppResult<Coach> {
    let id_str: String = row.get("id");
    let user_id_str: String = row.get("user_id");
    let experience_years: i64 = row.get("experience_years");
    let description: String = row.get("description");
    let profile_image_url: Option<String> = row.get("profile_image_url");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Coach {
        id: parse_uuid(&id_str)?,
        user_id: parse_uuid(&user_id_str)?,
        experience_years,
        description,
        profile_image_url,
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}
