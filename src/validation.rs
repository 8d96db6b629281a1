// ABOUTME: Pure field validators over JSON request values
// ABOUTME: Classifies values as missing, non-string, or non-non-negative-integer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Platform

//! Request field validators
//!
//! Handlers receive bodies as raw [`serde_json::Value`] objects and classify
//! each field with these predicates before building a typed payload. The
//! predicates have no side effects and never panic. A missing key maps to
//! `None`; JSON `null` is present-but-invalid for every predicate below.

use serde_json::Value;

/// True iff the field is absent from the request body
#[must_use]
pub const fn is_undefined(value: Option<&Value>) -> bool {
    value.is_none()
}

/// True unless the value is a JSON string with non-whitespace content
#[must_use]
pub fn is_not_valid_string(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// True unless the value is a whole JSON number >= 0
///
/// Floats with a zero fraction count as whole numbers, mirroring the numeric
/// model of the JSON payloads this API accepts.
#[must_use]
pub fn is_not_valid_integer(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => {
            if n.as_u64().is_some() {
                false
            } else {
                n.as_f64().is_none_or(|f| f < 0.0 || f.fract() != 0.0)
            }
        }
        _ => true,
    }
}

/// True iff the password contains at least one digit, one lowercase and one
/// uppercase ASCII letter, and is 8-16 characters long
#[must_use]
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    (8..=16).contains(&len)
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
}

/// True iff the value starts with "https"
#[must_use]
pub fn is_valid_https_url(value: &str) -> bool {
    value.starts_with("https")
}

/// Extract a validated non-empty string field, or record it as offending
///
/// Helper for the typed-body constructors: pushes `field` onto `invalid` and
/// returns an empty string when the value fails string validation, so a
/// single pass can collect every offending field name.
#[must_use]
pub fn require_string(
    body: &Value,
    field: &'static str,
    invalid: &mut Vec<&'static str>,
) -> String {
    let value = body.get(field);
    if is_undefined(value) || is_not_valid_string(value) {
        invalid.push(field);
        return String::new();
    }
    value
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Extract a validated non-negative integer field, or record it as offending
#[must_use]
pub fn require_integer(body: &Value, field: &'static str, invalid: &mut Vec<&'static str>) -> i64 {
    let value = body.get(field);
    if is_undefined(value) || is_not_valid_integer(value) {
        invalid.push(field);
        return 0;
    }
    value.and_then(Value::as_i64).unwrap_or_else(|| {
        // Whole float accepted by the predicate (e.g. 3.0)
        value
            .and_then(Value::as_f64)
            .map_or(0, |f| f as i64)
    })
}
