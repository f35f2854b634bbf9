// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show start times.
//!
//! Start times are stored as fixed-width UTC text
//! (`YYYY-MM-DDTHH:MM:SSZ`), so ordering and comparing the stored strings
//! gives the same answer as comparing the instants.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::DomainError;

/// Normalises an instant to UTC and drops sub-second precision.
#[must_use]
pub fn normalize_timestamp(value: OffsetDateTime) -> OffsetDateTime {
    let utc: OffsetDateTime = value.to_offset(UtcOffset::UTC);
    utc.replace_nanosecond(0).unwrap_or(utc)
}

/// Renders an instant in storage format.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted (years outside
/// 0000-9999).
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, DomainError> {
    let storage = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    let utc: OffsetDateTime = normalize_timestamp(value);
    if !(0..=9999).contains(&utc.year()) {
        return Err(DomainError::TimestampFormat(format!(
            "year {} is outside 0000-9999",
            utc.year()
        )));
    }
    utc.format(&storage)
        .map_err(|e| DomainError::TimestampFormat(e.to_string()))
}

/// Parses a start time.
///
/// Accepts RFC 3339 (which includes the storage format) and the form
/// format `YYYY-MM-DD HH:MM:SS`, read as UTC.
///
/// # Errors
///
/// Returns an error if the input matches neither format.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    let trimmed: &str = value.trim();

    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(normalize_timestamp(parsed));
    }

    let form = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(trimmed, &form)
        .map(|parsed| normalize_timestamp(parsed.assume_utc()))
        .map_err(|e| DomainError::InvalidTimestamp {
            value: value.to_string(),
            error: e.to_string(),
        })
}
