// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show queries and upcoming-show aggregates.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::dsl::count_star;
use diesel::prelude::*;
use fyyur_domain::{ArtistId, ShowId, VenueId, format_timestamp, parse_timestamp};
use time::OffsetDateTime;

use crate::data_models::ShowListing;
use crate::diesel_schema::{artists, shows, venues};
use crate::error::PersistenceError;

/// Counts shows starting strictly after `now`, keyed by venue id.
///
/// Venues with no upcoming shows are absent from the map.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn upcoming_counts_by_venue(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<HashMap<i64, i64>, PersistenceError> {
    let cutoff: String = format_timestamp(now)?;
    let rows: Vec<(i64, i64)> = shows::table
        .filter(shows::start_time.gt(cutoff))
        .group_by(shows::venue_id)
        .select((shows::venue_id, count_star()))
        .load(conn)?;
    Ok(rows.into_iter().collect())
}

/// Counts shows starting strictly after `now`, keyed by artist id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn upcoming_counts_by_artist(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<HashMap<i64, i64>, PersistenceError> {
    let cutoff: String = format_timestamp(now)?;
    let rows: Vec<(i64, i64)> = shows::table
        .filter(shows::start_time.gt(cutoff))
        .group_by(shows::artist_id)
        .select((shows::artist_id, count_star()))
        .load(conn)?;
    Ok(rows.into_iter().collect())
}

/// Lists every show with its venue and artist, in start order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_shows(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>, PersistenceError> {
    let rows: Vec<(i64, i64, String, i64, String, String, String)> = shows::table
        .inner_join(venues::table)
        .inner_join(artists::table)
        .order((shows::start_time.asc(), shows::show_id.asc()))
        .select((
            shows::show_id,
            shows::venue_id,
            venues::name,
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::start_time,
        ))
        .load(conn)?;

    rows.into_iter()
        .map(
            |(show_id, venue_id, venue_name, artist_id, artist_name, artist_image_link, start)| {
                Ok(ShowListing {
                    show_id: ShowId::new(show_id),
                    venue_id: VenueId::new(venue_id),
                    venue_name,
                    artist_id: ArtistId::new(artist_id),
                    artist_name,
                    artist_image_link,
                    start_time: parse_timestamp(&start)?,
                })
            },
        )
        .collect()
}

/// Counts every stored show.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_shows(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(shows::table.count().get_result(conn)?)
}
