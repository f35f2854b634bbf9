// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use fyyur_domain::{ArtistId, Venue, VenueId, parse_timestamp};
use time::OffsetDateTime;
use tracing::debug;

use crate::data_models::{
    SearchHit, SearchResults, VenueDetail, VenueGroup, VenueRow, VenueShow, VenueSummary,
};
use crate::diesel_schema::{artists, shows, venues};
use crate::error::PersistenceError;
use crate::queries::matches_term;
use crate::queries::shows::upcoming_counts_by_venue;

/// Loads the stored venue.
///
/// # Errors
///
/// Returns `VenueNotFound` if no such venue exists.
pub fn get_venue(conn: &mut SqliteConnection, venue_id: VenueId) -> Result<Venue, PersistenceError> {
    debug!(venue_id = venue_id.value(), "Loading venue");

    let row: Option<VenueRow> = venues::table
        .find(venue_id.value())
        .select(VenueRow::as_select())
        .first(conn)
        .optional()?;

    let row: VenueRow = row.ok_or(PersistenceError::VenueNotFound(venue_id.value()))?;
    let (_, venue) = row.into_venue()?;
    Ok(venue)
}

/// Returns `true` if a venue with this id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn venue_exists(conn: &mut SqliteConnection, venue_id: VenueId) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        venues::table.filter(venues::venue_id.eq(venue_id.value())),
    ))
    .get_result(conn)?)
}

/// Lists every venue grouped by (city, state).
///
/// Venues are read sorted by city, state and name. Groups are keyed on
/// the full pair, so a pair never yields two groups even if the rows for
/// it are not adjacent.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_venues_grouped_by_location(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<Vec<VenueGroup>, PersistenceError> {
    let rows: Vec<(i64, String, String, String)> = venues::table
        .select((venues::venue_id, venues::name, venues::city, venues::state))
        .order((
            venues::city.asc(),
            venues::state.asc(),
            venues::name.asc(),
            venues::venue_id.asc(),
        ))
        .load(conn)?;

    let upcoming: HashMap<i64, i64> = upcoming_counts_by_venue(conn, now)?;

    let groups: Vec<VenueGroup> = group_by_location(rows.into_iter().map(|(id, name, city, state)| {
        let summary: VenueSummary = VenueSummary {
            id: VenueId::new(id),
            name,
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        };
        (city, state, summary)
    }));

    debug!(groups = groups.len(), "Grouped venues by location");
    Ok(groups)
}

/// Groups venues by their exact (city, state) pair.
///
/// Groups appear in the order their pair is first seen; venues keep their
/// input order within a group.
pub(crate) fn group_by_location<I>(entries: I) -> Vec<VenueGroup>
where
    I: IntoIterator<Item = (String, String, VenueSummary)>,
{
    let mut groups: Vec<VenueGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for (city, state, summary) in entries {
        let key: (String, String) = (city, state);
        if let Some(&position) = index.get(&key) {
            groups[position].venues.push(summary);
        } else {
            index.insert(key.clone(), groups.len());
            groups.push(VenueGroup {
                city: key.0,
                state: key.1,
                venues: vec![summary],
            });
        }
    }

    groups
}

/// Case-insensitive substring search on venue names.
///
/// An empty term matches every venue.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn search_venues(
    conn: &mut SqliteConnection,
    term: &str,
    now: OffsetDateTime,
) -> Result<SearchResults<VenueId>, PersistenceError> {
    let rows: Vec<(i64, String)> = venues::table
        .select((venues::venue_id, venues::name))
        .order((venues::name.asc(), venues::venue_id.asc()))
        .load(conn)?;

    let upcoming: HashMap<i64, i64> = upcoming_counts_by_venue(conn, now)?;

    let data: Vec<SearchHit<VenueId>> = rows
        .into_iter()
        .filter(|(_, name)| matches_term(name, term))
        .map(|(id, name)| SearchHit {
            id: VenueId::new(id),
            name,
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        })
        .collect();

    debug!(term, matches = data.len(), "Searched venues");
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Loads a venue with its shows split into past and upcoming.
///
/// A show is past when it starts strictly before `now`; a show starting
/// exactly at `now` is upcoming. Both lists are in start order.
///
/// # Errors
///
/// Returns `VenueNotFound` if no such venue exists.
pub fn get_venue_detail(
    conn: &mut SqliteConnection,
    venue_id: VenueId,
    now: OffsetDateTime,
) -> Result<VenueDetail, PersistenceError> {
    let venue: Venue = get_venue(conn, venue_id)?;

    let rows: Vec<(i64, String, String, String)> = shows::table
        .inner_join(artists::table)
        .filter(shows::venue_id.eq(venue_id.value()))
        .order((shows::start_time.asc(), shows::show_id.asc()))
        .select((
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::start_time,
        ))
        .load(conn)?;

    let joined: Vec<VenueShow> = rows
        .into_iter()
        .map(into_venue_show)
        .collect::<Result<_, _>>()?;
    let (past_shows, upcoming_shows): (Vec<VenueShow>, Vec<VenueShow>) =
        joined.into_iter().partition(|show| show.start_time < now);

    Ok(VenueDetail {
        id: venue_id,
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

fn into_venue_show(
    (artist_id, artist_name, artist_image_link, start_time): (i64, String, String, String),
) -> Result<VenueShow, PersistenceError> {
    Ok(VenueShow {
        artist_id: ArtistId::new(artist_id),
        artist_name,
        artist_image_link,
        start_time: parse_timestamp(&start_time)?,
    })
}
