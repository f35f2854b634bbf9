// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission validation.
//!
//! A submission moves through two stages. The field stage checks every
//! text input against its [`FieldRule`] and every selected genre against
//! the enumeration, collecting all failures. Only a submission that passes
//! the field stage reaches the cross-field stage, which assembles the
//! typed entity (parsing the enumerations and de-duplicating genres).
//! A submission that fails either stage is rejected with [`FieldErrors`]
//! and never reaches the store.

use std::str::FromStr;

use crate::error::{FieldErrors, FieldViolation};
use crate::forms::{ArtistForm, FormField, FormInput, ShowForm, VenueForm};
use crate::schema::{ARTIST_SCHEMA, FieldFormat, FieldRule, FormSchema, VENUE_SCHEMA};
use crate::timestamp::parse_timestamp;
use crate::types::{Artist, ArtistId, Genre, NewShow, UsState, Venue, VenueId};

/// Returns `true` if `value` is an absolute `http`/`https` URL.
///
/// The host must be an IP address or a domain name ending in a top-level
/// domain, so single-label hosts such as `localhost` are rejected.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && match parsed.host() {
                Some(url::Host::Domain(domain)) => has_top_level_domain(domain),
                Some(url::Host::Ipv4(_) | url::Host::Ipv6(_)) => true,
                None => false,
            }
    })
}

/// Internationalised labels arrive punycoded (`xn--`) from the URL parser.
fn has_top_level_domain(domain: &str) -> bool {
    let domain: &str = domain.strip_suffix('.').unwrap_or(domain);
    match domain.rsplit_once('.') {
        Some((rest, tld)) if !rest.is_empty() => {
            (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
                || tld.starts_with("xn--")
        }
        _ => false,
    }
}

/// Returns `true` if `value` parses as a valid phone number.
///
/// No default region is assumed, so national-format numbers without a
/// leading `+` and country code are rejected.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    phonenumber::parse(None, value).is_ok_and(|number| phonenumber::is_valid(&number))
}

/// Checks one text input against its rule.
///
/// A blank required input stops at [`FieldViolation::Required`]; otherwise
/// the length and format checks both run and both may report.
///
/// # Errors
///
/// Returns every violation found for the input.
pub fn check_field(rule: &FieldRule, raw: &str) -> Result<(), Vec<FieldViolation>> {
    let value: &str = raw.trim();

    if value.is_empty() {
        return if rule.required {
            Err(vec![FieldViolation::Required])
        } else {
            Ok(())
        };
    }

    let mut violations: Vec<FieldViolation> = Vec::new();

    if value.chars().count() > rule.max_len {
        violations.push(FieldViolation::TooLong { max: rule.max_len });
    }

    match rule.format {
        FieldFormat::Text => {}
        FieldFormat::State => {
            if UsState::from_str(value).is_err() {
                violations.push(FieldViolation::InvalidState(value.to_string()));
            }
        }
        FieldFormat::Phone => {
            if !is_valid_phone(value) {
                violations.push(FieldViolation::InvalidPhone);
            }
        }
        FieldFormat::Url => {
            if !is_valid_url(value) {
                violations.push(FieldViolation::InvalidUrl);
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Checks a genre selection.
///
/// # Errors
///
/// Returns one violation per unknown genre, or `Required` when the
/// selection is empty and `required` is set.
pub fn check_genres(selection: &[String], required: bool) -> Result<(), Vec<FieldViolation>> {
    if selection.is_empty() {
        return if required {
            Err(vec![FieldViolation::Required])
        } else {
            Ok(())
        };
    }

    let violations: Vec<FieldViolation> = selection
        .iter()
        .filter(|genre| Genre::from_str(genre).is_err())
        .map(|genre| FieldViolation::InvalidGenre(genre.clone()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Runs the field stage of `schema` over `form`.
///
/// # Errors
///
/// Returns the violations of every failing field.
pub fn validate_form<F: FormInput>(schema: &FormSchema, form: &F) -> Result<(), FieldErrors> {
    let mut errors: FieldErrors = FieldErrors::new();

    for rule in schema.fields {
        let raw: &str = form.text(rule.field).unwrap_or_default();
        if let Err(violations) = check_field(rule, raw) {
            for violation in violations {
                errors.add(rule.field, violation);
            }
        }
    }

    if let Err(violations) = check_genres(form.genres(), schema.genres_required) {
        for violation in violations {
            errors.add(FormField::Genres, violation);
        }
    }

    errors.into_result(())
}

/// Validates a venue submission and builds the venue.
///
/// # Errors
///
/// Returns the per-field failures if the submission is rejected.
pub fn validate_venue(form: &VenueForm) -> Result<Venue, FieldErrors> {
    validate_form(&VENUE_SCHEMA, form)?;

    let mut errors: FieldErrors = FieldErrors::new();
    let state: Option<UsState> = parse_state(&form.state, &mut errors);
    let genres: Vec<Genre> = parse_genres(&form.genres, &mut errors);

    match state {
        Some(state) if errors.is_empty() => Ok(Venue {
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            state,
            address: form.address.trim().to_string(),
            phone: optional_text(&form.phone),
            image_link: form.image_link.trim().to_string(),
            facebook_link: optional_text(&form.facebook_link),
            website: form.website.trim().to_string(),
            seeking_talent: form.seeking_talent,
            seeking_description: optional_text(&form.seeking_description),
            genres,
        }),
        _ => Err(errors),
    }
}

/// Validates an artist submission and builds the artist.
///
/// # Errors
///
/// Returns the per-field failures if the submission is rejected.
pub fn validate_artist(form: &ArtistForm) -> Result<Artist, FieldErrors> {
    validate_form(&ARTIST_SCHEMA, form)?;

    let mut errors: FieldErrors = FieldErrors::new();
    let state: Option<UsState> = parse_state(&form.state, &mut errors);
    let genres: Vec<Genre> = parse_genres(&form.genres, &mut errors);

    match state {
        Some(state) if errors.is_empty() => Ok(Artist {
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            state,
            phone: optional_text(&form.phone),
            image_link: form.image_link.trim().to_string(),
            facebook_link: optional_text(&form.facebook_link),
            website: form.website.trim().to_string(),
            seeking_venue: form.seeking_venue,
            seeking_description: optional_text(&form.seeking_description),
            genres,
        }),
        _ => Err(errors),
    }
}

/// Validates a show submission.
///
/// Whether the referenced venue and artist exist is checked by the store
/// at write time, not here.
///
/// # Errors
///
/// Returns the per-field failures if the submission is rejected.
pub fn validate_show(form: &ShowForm) -> Result<NewShow, FieldErrors> {
    let mut errors: FieldErrors = FieldErrors::new();

    let venue_id: Option<VenueId> = parse_id(FormField::VenueId, &form.venue_id, &mut errors);
    let artist_id: Option<ArtistId> = parse_id(FormField::ArtistId, &form.artist_id, &mut errors);

    let start_time = if form.start_time.trim().is_empty() {
        errors.add(FormField::StartTime, FieldViolation::Required);
        None
    } else if let Ok(parsed) = parse_timestamp(&form.start_time) {
        Some(parsed)
    } else {
        errors.add(FormField::StartTime, FieldViolation::InvalidDateTime);
        None
    };

    match (venue_id, artist_id, start_time) {
        (Some(venue_id), Some(artist_id), Some(start_time)) => Ok(NewShow {
            venue_id,
            artist_id,
            start_time,
        }),
        _ => Err(errors),
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let value: &str = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_state(raw: &str, errors: &mut FieldErrors) -> Option<UsState> {
    let value: &str = raw.trim();
    match UsState::from_str(value) {
        Ok(state) => Some(state),
        Err(_) => {
            errors.add(
                FormField::State,
                FieldViolation::InvalidState(value.to_string()),
            );
            None
        }
    }
}

/// Parses the genre selection, keeping the first occurrence of each.
fn parse_genres(selection: &[String], errors: &mut FieldErrors) -> Vec<Genre> {
    let mut genres: Vec<Genre> = Vec::with_capacity(selection.len());
    for raw in selection {
        match Genre::from_str(raw) {
            Ok(genre) if !genres.contains(&genre) => genres.push(genre),
            Ok(_) => {}
            Err(_) => errors.add(FormField::Genres, FieldViolation::InvalidGenre(raw.clone())),
        }
    }
    genres
}

fn parse_id<T: FromStr>(field: FormField, raw: &str, errors: &mut FieldErrors) -> Option<T> {
    if raw.trim().is_empty() {
        errors.add(field, FieldViolation::Required);
        return None;
    }
    if let Ok(id) = raw.parse::<T>() {
        Some(id)
    } else {
        errors.add(field, FieldViolation::InvalidId);
        None
    }
}
