// ABOUTME: Database operations for credit packages
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
use crate::models::CreditPackage;

/// Request to create a new credit package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCreditPackageRequest {
    /// Display name, unique across packages
    pub name: String,
    /// Number of credits in the bundle
    pub credit_amount: i64,
    /// Price of the bundle
    pub price: i64,
}

/// Manager for credit package persistence
pub struct CreditPackageManager {
    pool: SqlitePool,
}

impl CreditPackageManager {
    /// Create a new credit package manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all credit packages
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_all(&self) -> AppResult<Vec<CreditPackage>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, credit_amount, price, created_at
            FROM credit_packages
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list credit packages: {e}")))?;

        rows.iter().map(row_to_credit_package).collect()
    }

    /// Find a credit package by its unique name
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<CreditPackage>> {
        let row = sqlx::query(
            r"
            SELECT id, name, credit_amount, price, created_at
            FROM credit_packages
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up credit package: {e}")))?;

        row.as_ref().map(row_to_credit_package).transpose()
    }

    /// Insert a new credit package
    ///
    /// Name uniqueness is checked by the caller; the UNIQUE constraint is the
    /// backstop for racing inserts.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, request: &CreateCreditPackageRequest) -> AppResult<CreditPackage> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO credit_packages (id, name, credit_amount, price, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(id.to_string())
        .bind(&request.name)
        .bind(request.credit_amount)
        .bind(request.price)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create credit package: {e}")))?;

        Ok(CreditPackage {
            id,
            name: request.name.clone(),
            credit_amount: request.credit_amount,
            price: request.price,
            created_at: now,
        })
    }

    /// Delete a credit package by id, returning the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM credit_packages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete credit package: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_credit_package(row: &SqliteRow) -> AppResult<CreditPackage> {
    let id_str: String = row.get("id");
    let name: String = row.get("name");
    let credit_amount: i64 = row.get("credit_amount");
    let price: i64 = row.get("price");
    let created_at_str: String = row.get("created_at");

    Ok(CreditPackage {
        id: parse_uuid(&id_str)?,
        name,
        credit_amount,
        price,
        created_at: parse_timestamp(&created_at_str)?,
    })
}
