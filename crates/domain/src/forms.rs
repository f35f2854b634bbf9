// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw form submissions.
//!
//! A form holds exactly what the user typed. It is never mutated by
//! validation, so a rejected submission can be redisplayed as-is next to
//! its [`FieldErrors`](crate::FieldErrors).

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::timestamp::format_timestamp;
use crate::types::{Artist, Venue};

/// A named input on one of the submission forms.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    City,
    State,
    Address,
    Phone,
    Website,
    ImageLink,
    FacebookLink,
    Genres,
    SeekingDescription,
    VenueId,
    ArtistId,
    StartTime,
}

impl FormField {
    /// Returns the input's wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::ImageLink => "image_link",
            Self::FacebookLink => "facebook_link",
            Self::Genres => "genres",
            Self::SeekingDescription => "seeking_description",
            Self::VenueId => "venue_id",
            Self::ArtistId => "artist_id",
            Self::StartTime => "start_time",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read access to the text inputs and genre selection of a form.
///
/// The generic field checks in [`validate_form`](crate::validate_form)
/// work against this trait so one schema-driven routine serves every
/// entity form.
pub trait FormInput {
    /// Returns the raw text of a text input, or `None` if the form has no
    /// such input.
    fn text(&self, field: FormField) -> Option<&str>;

    /// Returns the raw genre selection.
    fn genres(&self) -> &[String];
}

/// The venue create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl FormInput for VenueForm {
    fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::City => Some(&self.city),
            FormField::State => Some(&self.state),
            FormField::Address => Some(&self.address),
            FormField::Phone => Some(&self.phone),
            FormField::Website => Some(&self.website),
            FormField::ImageLink => Some(&self.image_link),
            FormField::FacebookLink => Some(&self.facebook_link),
            FormField::SeekingDescription => Some(&self.seeking_description),
            FormField::Genres | FormField::VenueId | FormField::ArtistId | FormField::StartTime => {
                None
            }
        }
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.as_str().to_string(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone(),
            genres: venue
                .genres
                .iter()
                .map(|genre| genre.as_str().to_string())
                .collect(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// The artist create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl FormInput for ArtistForm {
    fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::City => Some(&self.city),
            FormField::State => Some(&self.state),
            FormField::Phone => Some(&self.phone),
            FormField::Website => Some(&self.website),
            FormField::ImageLink => Some(&self.image_link),
            FormField::FacebookLink => Some(&self.facebook_link),
            FormField::SeekingDescription => Some(&self.seeking_description),
            FormField::Address
            | FormField::Genres
            | FormField::VenueId
            | FormField::ArtistId
            | FormField::StartTime => None,
        }
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.as_str().to_string(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone(),
            genres: artist
                .genres
                .iter()
                .map(|genre| genre.as_str().to_string())
                .collect(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// The show booking form.
///
/// Identifiers arrive as text, the way a browser posts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl Default for ShowForm {
    /// Pre-fills `start_time` with the current instant.
    fn default() -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: format_timestamp(OffsetDateTime::now_utc()).unwrap_or_default(),
        }
    }
}
