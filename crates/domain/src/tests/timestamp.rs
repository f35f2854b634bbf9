// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{DomainError, format_timestamp, parse_timestamp};

#[test]
fn test_format_timestamp_is_fixed_width_utc() {
    let formatted: String = format_timestamp(datetime!(2035-04-01 20:00:00.750 +02:00)).unwrap();
    assert_eq!(formatted, "2035-04-01T18:00:00Z");
}

#[test]
fn test_storage_order_matches_chronological_order() {
    let earlier: String = format_timestamp(datetime!(2019-12-31 23:59:59 UTC)).unwrap();
    let later: String = format_timestamp(datetime!(2020-01-01 00:00:00 UTC)).unwrap();
    assert!(earlier < later);
}

#[test]
fn test_parse_timestamp_accepts_storage_rfc3339_and_form_formats() {
    let expected = datetime!(2035-04-01 20:00:00 UTC);
    assert_eq!(parse_timestamp("2035-04-01T20:00:00Z").unwrap(), expected);
    assert_eq!(parse_timestamp("2035-04-01T22:00:00+02:00").unwrap(), expected);
    assert_eq!(parse_timestamp("2035-04-01 20:00:00").unwrap(), expected);
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(matches!(
        parse_timestamp("next tuesday"),
        Err(DomainError::InvalidTimestamp { .. })
    ));
}

#[test]
fn test_format_then_parse_preserves_whole_seconds() {
    let original = datetime!(2031-07-15 09:30:05 UTC);
    let stored: String = format_timestamp(original).unwrap();
    assert_eq!(parse_timestamp(&stored).unwrap(), original);
}
