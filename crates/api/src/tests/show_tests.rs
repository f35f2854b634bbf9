// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_domain::{ArtistId, FieldViolation, FormField, ShowForm, ShowId, VenueId};
use fyyur_persistence::{Persistence, ShowListing};

use super::helpers::{create_seeded_persistence, create_test_show_form};
use crate::{ApiError, MutationResponse, create_show, list_shows};

#[test]
fn test_create_show_flashes_success() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();

    let response: MutationResponse<ShowId> = create_show(
        &mut persistence,
        &create_test_show_form(venue_id, artist_id, "2035-04-01 20:00:00"),
    )
    .unwrap();

    assert_eq!(response.message, "Show was successfully listed!");
    let shows: Vec<ShowListing> = list_shows(&mut persistence).unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].show_id, response.id);
    assert_eq!(shows[0].venue_name, "The Fillmore");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
}

#[test]
fn test_create_show_for_missing_venue_flashes_failure() {
    let (mut persistence, _, artist_id) = create_seeded_persistence();

    let err: ApiError = create_show(
        &mut persistence,
        &create_test_show_form(VenueId::new(99), artist_id, "2035-04-01 20:00:00"),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApiError::OperationFailed {
            message: String::from("An error occurred. Show could not be listed."),
        }
    );
    assert_eq!(err.to_string(), "An error occurred. Show could not be listed.");
    assert!(list_shows(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_create_show_for_missing_artist_flashes_failure() {
    let (mut persistence, venue_id, _) = create_seeded_persistence();

    let err: ApiError = create_show(
        &mut persistence,
        &create_test_show_form(venue_id, ArtistId::new(99), "2035-04-01 20:00:00"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::OperationFailed { .. }));
    assert!(list_shows(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_create_show_with_bad_form_is_validation_failure() {
    let (mut persistence, _, _) = create_seeded_persistence();
    let form: ShowForm = ShowForm {
        artist_id: String::from("-1"),
        venue_id: String::new(),
        start_time: String::from("next friday"),
    };

    let err: ApiError = create_show(&mut persistence, &form).unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get(FormField::ArtistId), &[FieldViolation::InvalidId]);
    assert_eq!(errors.get(FormField::VenueId), &[FieldViolation::Required]);
    assert_eq!(
        errors.get(FormField::StartTime),
        &[FieldViolation::InvalidDateTime]
    );
}

#[test]
fn test_list_shows_empty() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert!(list_shows(&mut persistence).unwrap().is_empty());
}
