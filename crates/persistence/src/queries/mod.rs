// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `venues` - venue lookup, location grouping, search and detail
//! - `artists` - artist lookup, listing, search and detail
//! - `shows` - show listing and upcoming-show aggregates
//!
//! Timestamps are stored as fixed-width UTC text truncated to the second.
//! Upcoming counts compare that text in SQL; `start > now` gives the same
//! answer against the truncated `now`. Detail views parse the rows back and
//! compare against the full-precision `now`.

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{artist_exists, get_artist, get_artist_detail, list_artists, search_artists};
pub use shows::{count_shows, list_shows};
pub use venues::{
    get_venue, get_venue_detail, list_venues_grouped_by_location, search_venues, venue_exists,
};

/// Case-insensitive substring match used by both name searches.
pub(crate) fn matches_term(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
