// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod forms;
mod schema;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, FieldErrors, FieldViolation};
pub use forms::{ArtistForm, FormField, FormInput, ShowForm, VenueForm};
pub use schema::{
    ARTIST_SCHEMA, FieldFormat, FieldRule, FormSchema, LONG_TEXT_MAX, SHORT_TEXT_MAX,
    VENUE_SCHEMA,
};
pub use timestamp::{format_timestamp, normalize_timestamp, parse_timestamp};
pub use types::{Artist, ArtistId, Genre, NewShow, ShowId, UsState, Venue, VenueId};
pub use validation::{
    check_field, check_genres, is_valid_phone, is_valid_url, validate_artist, validate_form,
    validate_show, validate_venue,
};
