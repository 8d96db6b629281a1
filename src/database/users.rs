// ABOUTME: User account database operations
// ABOUTME: Handles user lookup, creation, and transactional coach promotion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::models::{Coach, User, UserRole};

/// Coach profile fields supplied with a promotion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoteToCoachRequest {
    /// Years of coaching experience
    pub experience_years: i64,
    /// Coach biography
    pub description: String,
    /// Optional profile image URL
    pub profile_image_url: Option<String>,
}

/// Manager for user persistence and role changes
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user with the given name, email, and role
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including duplicate email)
    pub async fn create(&self, name: &str, email: &str, role: UserRole) -> AppResult<User> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO users (id, name, email, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(email)
        .bind(role.as_str())
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        Ok(User {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a user by id
    ///
    /// The id arrives as an opaque path segment; a malformed id simply
    /// matches no row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, role, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Promote a user to coach: set role=COACH and insert the coach profile
    ///
    /// Both writes run in one transaction; the role precondition is
    /// re-checked inside it, so two racing promotions serialize at the
    /// datastore and the loser observes the already-coach failure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the user does not exist
    /// - the user already holds the coach role
    /// - either write fails
    pub async fn promote_to_coach(
        &self,
        user_id: &str,
        request: &PromoteToCoachRequest,
    ) -> AppResult<(User, Coach)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let row = sqlx::query(
            r"
            SELECT id, name, email, role, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        let user = match row {
            Some(ref row) => row_to_user(row)?,
            None => return Err(AppError::not_found(messages::USER_NOT_FOUND)),
        };
        if user.role == UserRole::Coach {
            return Err(AppError::invalid_input(messages::USER_ALREADY_COACH));
        }

        let now = Utc::now();

        let updated = sqlx::query(
            r"
            UPDATE users SET role = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .bind(UserRole::Coach.as_str())
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update user role: {e}")))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::invalid_input(messages::USER_UPDATE_FAILED));
        }

        let coach_id = Uuid::new_v4();
        sqlx::query(
            r"
            INSERT INTO coaches (
                id, user_id, experience_years, description, profile_image_url,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(coach_id.to_string())
        .bind(user_id)
        .bind(request.experience_years)
        .bind(&request.description)
        .bind(&request.profile_image_url)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create coach profile: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit promotion: {e}")))?;

        let coach = Coach {
            id: coach_id,
            user_id: user.id,
            experience_years: request.experience_years,
            description: request.description.clone(),
            profile_image_url: request.profile_image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        let user = User {
            role: UserRole::Coach,
            updated_at: now,
            ..user
        };

        Ok((user, coach))
    }
}

pub(crate) fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let id_str: String = row.get("id");
    let name: String = row.get("name");
    let email: String = row.get("email");
    let role_str: String = row.get("role");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    Ok(User {
        id: parse_uuid(&id_str)?,
        name,
        email,
        role: UserRole::parse(&role_str),
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}
