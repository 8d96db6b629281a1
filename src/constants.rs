// ABOUTME: Application constants shared across routes and error handling
// ABOUTME: Holds the client-facing message catalog and pagination defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Application constants

/// Client-facing response messages
///
/// The admin panel consuming this API is localized in Traditional Chinese;
/// these strings are part of the response contract and must not be reworded.
pub mod messages {
    /// One or more request fields are missing or malformed
    pub const INVALID_FIELDS: &str = "欄位未填寫正確";
    /// A unique field already holds the submitted value
    pub const DUPLICATE_DATA: &str = "資料重複";
    /// Path id is malformed or targets no row
    pub const INVALID_ID: &str = "ID錯誤";
    /// Generic server-side failure
    pub const SERVER_ERROR: &str = "伺服器錯誤";
    /// No route matches the request
    pub const ROUTE_NOT_FOUND: &str = "無此網站路由";
    /// Referenced user does not exist
    pub const USER_NOT_FOUND: &str = "使用者不存在";
    /// Referenced user has not been promoted to coach
    pub const USER_NOT_COACH: &str = "使用者尚未成為教練";
    /// Target user already holds the coach role
    pub const USER_ALREADY_COACH: &str = "使用者已經是教練";
    /// Targeted course does not exist
    pub const COURSE_NOT_FOUND: &str = "課程不存在";
    /// Course update affected no rows
    pub const COURSE_UPDATE_FAILED: &str = "更新課程失敗";
    /// User role update affected no rows
    pub const USER_UPDATE_FAILED: &str = "更新使用者失敗";
    /// Requested coach profile does not exist
    pub const COACH_NOT_FOUND: &str = "找不到該教練";
}

/// Pagination defaults for list endpoints
pub mod pagination {
    /// Default page size when `per` is absent or invalid
    pub const DEFAULT_PER: u32 = 10;
    /// Default page number when `page` is absent or invalid
    pub const DEFAULT_PAGE: u32 = 1;
}
