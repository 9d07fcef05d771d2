use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

pub fn to_i64(value: usize) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| Error::StoreUnavailable(format!("value {value} exceeds SQLite INTEGER range")))
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| Error::StoreUnavailable(format!("failed to parse {field} '{value}': {err}")))
}

pub fn parse_optional_datetime(
    value: Option<String>,
    field: &str,
) -> Result<Option<DateTime<Utc>>> {
    match value {
        Some(raw) => parse_datetime(&raw, field).map(Some),
        None => Ok(None),
    }
}
