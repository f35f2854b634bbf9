// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Artist queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use fyyur_domain::{Artist, ArtistId, VenueId, parse_timestamp};
use time::OffsetDateTime;
use tracing::debug;

use crate::data_models::{
    ArtistDetail, ArtistRow, ArtistShow, ArtistSummary, SearchHit, SearchResults,
};
use crate::diesel_schema::{artists, shows, venues};
use crate::error::PersistenceError;
use crate::queries::matches_term;
use crate::queries::shows::upcoming_counts_by_artist;

/// Loads the stored artist.
///
/// # Errors
///
/// Returns `ArtistNotFound` if no such artist exists.
pub fn get_artist(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
) -> Result<Artist, PersistenceError> {
    debug!(artist_id = artist_id.value(), "Loading artist");

    let row: Option<ArtistRow> = artists::table
        .find(artist_id.value())
        .select(ArtistRow::as_select())
        .first(conn)
        .optional()?;

    let row: ArtistRow = row.ok_or(PersistenceError::ArtistNotFound(artist_id.value()))?;
    let (_, artist) = row.into_artist()?;
    Ok(artist)
}

/// Returns `true` if an artist with this id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn artist_exists(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        artists::table.filter(artists::artist_id.eq(artist_id.value())),
    ))
    .get_result(conn)?)
}

/// Lists every artist by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_artists(conn: &mut SqliteConnection) -> Result<Vec<ArtistSummary>, PersistenceError> {
    let rows: Vec<(i64, String)> = artists::table
        .select((artists::artist_id, artists::name))
        .order((artists::name.asc(), artists::artist_id.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistSummary {
            id: ArtistId::new(id),
            name,
        })
        .collect())
}

/// Case-insensitive substring search on artist names.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn search_artists(
    conn: &mut SqliteConnection,
    term: &str,
    now: OffsetDateTime,
) -> Result<SearchResults<ArtistId>, PersistenceError> {
    let rows: Vec<(i64, String)> = artists::table
        .select((artists::artist_id, artists::name))
        .order((artists::name.asc(), artists::artist_id.asc()))
        .load(conn)?;

    let upcoming: HashMap<i64, i64> = upcoming_counts_by_artist(conn, now)?;

    let data: Vec<SearchHit<ArtistId>> = rows
        .into_iter()
        .filter(|(_, name)| matches_term(name, term))
        .map(|(id, name)| SearchHit {
            id: ArtistId::new(id),
            name,
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        })
        .collect();

    debug!(term, matches = data.len(), "Searched artists");
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Loads an artist with its shows split into past and upcoming.
///
/// Uses the same boundary as venues: strictly before `now` is past.
///
/// # Errors
///
/// Returns `ArtistNotFound` if no such artist exists.
pub fn get_artist_detail(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
    now: OffsetDateTime,
) -> Result<ArtistDetail, PersistenceError> {
    let artist: Artist = get_artist(conn, artist_id)?;

    let rows: Vec<(i64, String, String, String)> = shows::table
        .inner_join(venues::table)
        .filter(shows::artist_id.eq(artist_id.value()))
        .order((shows::start_time.asc(), shows::show_id.asc()))
        .select((
            shows::venue_id,
            venues::name,
            venues::image_link,
            shows::start_time,
        ))
        .load(conn)?;

    let joined: Vec<ArtistShow> = rows
        .into_iter()
        .map(into_artist_show)
        .collect::<Result<_, _>>()?;
    let (past_shows, upcoming_shows): (Vec<ArtistShow>, Vec<ArtistShow>) =
        joined.into_iter().partition(|show| show.start_time < now);

    Ok(ArtistDetail {
        id: artist_id,
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

fn into_artist_show(
    (venue_id, venue_name, venue_image_link, start_time): (i64, String, String, String),
) -> Result<ArtistShow, PersistenceError> {
    Ok(ArtistShow {
        venue_id: VenueId::new(venue_id),
        venue_name,
        venue_image_link,
        start_time: parse_timestamp(&start_time)?,
    })
}
