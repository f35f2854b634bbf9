// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_api::ApiError;
use fyyur_persistence::Persistence;
use serde_json::Value;

use super::{ARTIST_FORM, VENUE_FORM, run_json};
use crate::error::CliError;

fn seeded() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    run_json(&mut persistence, &["venues", "create"], VENUE_FORM).unwrap();
    run_json(&mut persistence, &["artists", "create"], ARTIST_FORM).unwrap();
    persistence
}

#[test]
fn test_create_venue_prints_flash_message() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let output: Value = run_json(&mut persistence, &["venues", "create", "-"], VENUE_FORM).unwrap();

    assert_eq!(output["id"], 1);
    assert_eq!(output["message"], "Venue The Fillmore was successfully listed!");
}

#[test]
fn test_venue_list_prints_groups() {
    let mut persistence: Persistence = seeded();

    let output: Value = run_json(&mut persistence, &["venues", "list"], "").unwrap();

    assert_eq!(output["areas"][0]["city"], "San Francisco");
    assert_eq!(output["areas"][0]["venues"][0]["name"], "The Fillmore");
}

#[test]
fn test_show_create_then_venue_show() {
    let mut persistence: Persistence = seeded();

    let created: Value = run_json(
        &mut persistence,
        &["shows", "create"],
        r#"{"venue_id": "1", "artist_id": "1", "start_time": "2031-01-01 20:00:00"}"#,
    )
    .unwrap();
    let detail: Value = run_json(&mut persistence, &["venues", "show", "1"], "").unwrap();

    assert_eq!(created["message"], "Show was successfully listed!");
    assert_eq!(detail["upcoming_shows_count"], 1);
    assert_eq!(detail["upcoming_shows"][0]["artist_name"], "Guns N Petals");
}

#[test]
fn test_invalid_form_reports_validation_failure() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let err: CliError =
        run_json(&mut persistence, &["venues", "create"], r#"{"name": "Nameless"}"#).unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::ValidationFailed { .. })));
    assert!(err.to_string().contains("city: This field is required."));
}

#[test]
fn test_malformed_json_is_invalid_input() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let err: CliError = run_json(&mut persistence, &["artists", "create"], "{").unwrap_err();

    assert!(matches!(err, CliError::InvalidInput(_)));
}

#[test]
fn test_missing_venue_is_not_found() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let err: CliError = run_json(&mut persistence, &["venues", "delete", "3"], "").unwrap_err();

    assert_eq!(err.to_string(), "Venue not found: Venue 3 does not exist");
}

#[test]
fn test_artist_form_prints_editable_form() {
    let mut persistence: Persistence = seeded();

    let output: Value = run_json(&mut persistence, &["artists", "form", "1"], "").unwrap();

    assert_eq!(output["artist_id"], 1);
    assert_eq!(output["form"]["name"], "Guns N Petals");
    assert_eq!(output["form"]["facebook_link"], "");
}

#[test]
fn test_search_prints_count() {
    let mut persistence: Persistence = seeded();

    let output: Value = run_json(&mut persistence, &["artists", "search", "guns"], "").unwrap();

    assert_eq!(output["search_term"], "guns");
    assert_eq!(output["results"]["count"], 1);
}
