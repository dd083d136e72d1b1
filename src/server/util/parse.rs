use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::AppError;

/// Splits a stored comma separated id list, dropping blanks.
pub fn parse_id_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins ids into the comma separated storage format.
pub fn join_id_list<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter().collect::<Vec<_>>().join(",")
}

/// Parses a date given either as `YYYY-MM-DD` (start of day, UTC) or RFC 3339.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_date_or_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(start) = date.and_hms_opt(0, 0, 0) {
            return Ok(start.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest(format!("ogiltigt datum: {}", value)))
}

/// Parses an optional `YYYY-MM-DD` date, treating blank input as absent.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("ogiltigt datum: {}", v))),
        None => Ok(None),
    }
}
