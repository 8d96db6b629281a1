// ABOUTME: Entity records persisted by the datastore managers
// ABOUTME: Defines credit packages, skills, users, coach profiles, and courses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Common data models
//!
//! Entities are passive records; invariants (name uniqueness, role
//! preconditions) are enforced by the handlers and managers, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a platform user holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular member
    #[default]
    User,
    /// Promoted coach who can own courses
    Coach,
}

impl UserRole {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Coach => "COACH",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "COACH" => Self::Coach,
            _ => Self::User,
        }
    }
}

/// Purchasable bundle of credits at a price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditPackage {
    /// Unique identifier
    pub id: Uuid,
    /// Display name, unique across packages
    pub name: String,
    /// Number of credits in the bundle
    pub credit_amount: i64,
    /// Price of the bundle
    pub price: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Named coaching skill/category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier
    pub id: Uuid,
    /// Display name, unique across skills
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Platform user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Current role
    pub role: UserRole,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Extended profile for a user promoted to coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coach {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user (1:1 with a promoted [`User`])
    pub user_id: Uuid,
    /// Years of coaching experience
    pub experience_years: i64,
    /// Coach biography
    pub description: String,
    /// Profile image URL; must start with "https" when present
    pub profile_image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A scheduled coaching session taught by a coach
///
/// `start_at`/`end_at` are stored and returned verbatim as received; the API
/// treats them as opaque non-empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    pub id: Uuid,
    /// Teaching coach's user id
    pub user_id: Uuid,
    /// Skill taught in the course
    pub skill_id: Uuid,
    /// Course name
    pub name: String,
    /// Course description
    pub description: String,
    /// Session start, as received
    pub start_at: String,
    /// Session end, as received
    pub end_at: String,
    /// Maximum number of participants
    pub max_participants: i64,
    /// Meeting URL; must start with "https"
    pub meeting_url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
