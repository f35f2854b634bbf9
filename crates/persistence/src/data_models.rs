// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row mappings and view models.
//!
//! Row structs mirror the tables one-to-one and never leave this crate.
//! View models are what the query layer hands to callers; they are built
//! explicitly from rows and carry only what a listing or detail view needs.

use std::str::FromStr;

use diesel::prelude::*;
use fyyur_domain::{Artist, ArtistId, Genre, ShowId, UsState, Venue, VenueId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::diesel_schema::{artists, venues};
use crate::error::PersistenceError;

/// Diesel Queryable struct for venue rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = venues)]
pub(crate) struct VenueRow {
    pub venue_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: String,
    pub seeking_talent: i32,
    pub seeking_description: Option<String>,
    pub genres: String,
}

impl VenueRow {
    /// Rebuilds the domain venue from a stored row.
    pub(crate) fn into_venue(self) -> Result<(VenueId, Venue), PersistenceError> {
        let venue: Venue = Venue {
            state: decode_state(&self.state)?,
            genres: decode_genres(&self.genres)?,
            name: self.name,
            city: self.city,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_talent: self.seeking_talent != 0,
            seeking_description: self.seeking_description,
        };
        Ok((VenueId::new(self.venue_id), venue))
    }
}

/// Column values written on venue insert and full update.
///
/// `None` writes `NULL`, so an update always replaces every column.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues, treat_none_as_null = true)]
pub(crate) struct VenueChangeset<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'static str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub image_link: &'a str,
    pub facebook_link: Option<&'a str>,
    pub website: &'a str,
    pub seeking_talent: i32,
    pub seeking_description: Option<&'a str>,
    pub genres: String,
}

impl<'a> VenueChangeset<'a> {
    pub(crate) fn from_venue(venue: &'a Venue) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: &venue.name,
            city: &venue.city,
            state: venue.state.as_str(),
            address: &venue.address,
            phone: venue.phone.as_deref(),
            image_link: &venue.image_link,
            facebook_link: venue.facebook_link.as_deref(),
            website: &venue.website,
            seeking_talent: i32::from(venue.seeking_talent),
            seeking_description: venue.seeking_description.as_deref(),
            genres: encode_genres(&venue.genres)?,
        })
    }
}

/// Diesel Queryable struct for artist rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = artists)]
pub(crate) struct ArtistRow {
    pub artist_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: String,
    pub seeking_venue: i32,
    pub seeking_description: Option<String>,
    pub genres: String,
}

impl ArtistRow {
    /// Rebuilds the domain artist from a stored row.
    pub(crate) fn into_artist(self) -> Result<(ArtistId, Artist), PersistenceError> {
        let artist: Artist = Artist {
            state: decode_state(&self.state)?,
            genres: decode_genres(&self.genres)?,
            name: self.name,
            city: self.city,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: self.seeking_venue != 0,
            seeking_description: self.seeking_description,
        };
        Ok((ArtistId::new(self.artist_id), artist))
    }
}

/// Column values written on artist insert and full update.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = artists, treat_none_as_null = true)]
pub(crate) struct ArtistChangeset<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'static str,
    pub phone: Option<&'a str>,
    pub image_link: &'a str,
    pub facebook_link: Option<&'a str>,
    pub website: &'a str,
    pub seeking_venue: i32,
    pub seeking_description: Option<&'a str>,
    pub genres: String,
}

impl<'a> ArtistChangeset<'a> {
    pub(crate) fn from_artist(artist: &'a Artist) -> Result<Self, PersistenceError> {
        Ok(Self {
            name: &artist.name,
            city: &artist.city,
            state: artist.state.as_str(),
            phone: artist.phone.as_deref(),
            image_link: &artist.image_link,
            facebook_link: artist.facebook_link.as_deref(),
            website: &artist.website,
            seeking_venue: i32::from(artist.seeking_venue),
            seeking_description: artist.seeking_description.as_deref(),
            genres: encode_genres(&artist.genres)?,
        })
    }
}

fn encode_genres(genres: &[Genre]) -> Result<String, PersistenceError> {
    let labels: Vec<&str> = genres.iter().map(Genre::as_str).collect();
    Ok(serde_json::to_string(&labels)?)
}

fn decode_genres(stored: &str) -> Result<Vec<Genre>, PersistenceError> {
    let labels: Vec<String> = serde_json::from_str(stored)?;
    labels
        .iter()
        .map(|label| {
            Genre::from_str(label).map_err(|e| PersistenceError::SerializationError(e.to_string()))
        })
        .collect()
}

fn decode_state(stored: &str) -> Result<UsState, PersistenceError> {
    UsState::from_str(stored).map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// A venue as shown inside a location group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A single name-search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit<I> {
    pub id: I,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// The result of a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<I> {
    pub count: usize,
    pub data: Vec<SearchHit<I>>,
}

/// An artist as listed on the artists page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

/// A show on a venue's page, annotated with its artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueShow {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

/// A show on an artist's page, annotated with its venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistShow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

/// A venue with its shows split around the query instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueDetail {
    pub id: VenueId,
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// An artist with its shows split around the query instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: ArtistId,
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A row of the shows listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub show_id: ShowId,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}
