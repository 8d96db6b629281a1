// ABOUTME: Database operations for courses
// ABOUTME: Handles course insert, full-record update, and lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::errors::{AppError, AppResult};
use crate::models::Course;

/// Request to create a new course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    /// Teaching coach's user id
    pub user_id: String,
    /// Skill taught in the course
    pub skill_id: String,
    /// Course name
    pub name: String,
    /// Course description
    pub description: String,
    /// Session start, stored as received
    pub start_at: String,
    /// Session end, stored as received
    pub end_at: String,
    /// Maximum number of participants
    pub max_participants: i64,
    /// Meeting URL
    pub meeting_url: String,
}

/// Request to update an existing course; every editable field is required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    /// Skill taught in the course
    pub skill_id: String,
    /// Course name
    pub name: String,
    /// Course description
    pub description: String,
    /// Session start, stored as received
    pub start_at: String,
    /// Session end, stored as received
    pub end_at: String,
    /// Maximum number of participants
    pub max_participants: i64,
    /// Meeting URL
    pub meeting_url: String,
}

/// Manager for course persistence
pub struct CourseManager {
    pool: SqlitePool,
}

impl CourseManager {
    /// Create a new course manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new course and return its generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, request: &CreateCourseRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO courses (
                id, user_id, skill_id, name, description, start_at, end_at,
                max_participants, meeting_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(id.to_string())
        .bind(&request.user_id)
        .bind(&request.skill_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.start_at)
        .bind(&request.end_at)
        .bind(request.max_participants)
        .bind(&request.meeting_url)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create course: {e}")))?;

        Ok(id)
    }

    /// Get a course by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, skill_id, name, description, start_at, end_at,
                   max_participants, meeting_url, created_at, updated_at
            FROM courses
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get course: {e}")))?;

        row.as_ref().map(row_to_course).transpose()
    }

    /// Update every editable field of a course, returning the affected count
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update(&self, id: &str, request: &UpdateCourseRequest) -> AppResult<u64> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            UPDATE courses SET
                skill_id = $2,
                name = $3,
                description = $4,
                start_at = $5,
                end_at = $6,
                max_participants = $7,
                meeting_url = $8,
                updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&request.skill_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.start_at)
        .bind(&request.end_at)
        .bind(request.max_participants)
        .bind(&request.meeting_url)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update course: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_course(row: &SqliteRow) -> AppResult<Course> {
    let id_str: String = row.get("id");
    let user_id_str: String = row.get("user_id");
    let skill_id_str: String = row.get("skill_id");
    let name: String = row.get("name");
    let description: String = row.get("description");
    let start_at: String = row.get("start_at");
    let end_at: String = row.get("end_at");
    let max_participants: i64 = row.get("max_participants");
    let meeting_url: String = row.get("meeting_url");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(Course {
        id: parse_uuid(&id_str)?,
        user_id: parse_uuid(&user_id_str)?,
        skill_id: parse_uuid(&skill_id_str)?,
        name,
        description,
        start_at,
        end_at,
        max_participants,
        meeting_url,
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}
