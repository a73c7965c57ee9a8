//! Field-level validation shared by every handler.
//!
//! Each check either returns the normalized (trimmed / parsed) value or a
//! [`FieldError`] carrying the exact message that ends up in the response envelope.
//! Callers pass the message so that every endpoint keeps its own wording.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;
use validator::ValidateEmail;

/// The only accepted shape for calendar dates (`start_date`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FieldError(pub String);

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Trims `value`, treating blank strings as absent.
pub fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Required string: absent or empty after trimming is rejected.
pub fn required(value: Option<&str>, message: &str) -> Result<String, FieldError> {
    trimmed(value).ok_or_else(|| FieldError::new(message))
}

/// Numeric id: non-empty and a positive integer.
pub fn numeric_id(value: Option<&str>, message: &str) -> Result<i64, FieldError> {
    trimmed(value)
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| FieldError::new(message))
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// Absolute URL with a scheme and a host (`http://x.com`, not `x.com` or `mailto:a`).
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).map(|u| u.has_host()).unwrap_or(false)
}

/// Strict `YYYY-MM-DD`: the value must survive a parse-and-reformat round trip, so
/// `2024-02-30` (invalid day) and `2024-2-5` (unpadded) are both rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|d| d.format(DATE_FORMAT).to_string() == value)
}

pub fn email(value: &str, message: &str) -> Result<String, FieldError> {
    if is_valid_email(value) {
        Ok(value.to_string())
    } else {
        Err(FieldError::new(message))
    }
}

pub fn url(value: &str, message: &str) -> Result<String, FieldError> {
    if is_valid_url(value) {
        Ok(value.to_string())
    } else {
        Err(FieldError::new(message))
    }
}

pub fn date(value: &str, message: &str) -> Result<NaiveDate, FieldError> {
    parse_date(value).ok_or_else(|| FieldError::new(message))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Serde adapter for request bodies: accepts strings, numbers and booleans and
/// hands them over as `Option<String>`. `null`, arrays and objects become `None`.
///
/// Clients send ids both as `5` and `"5"`; this keeps the DTOs simple.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_to_string))
}
