// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Fyyur booking directory.
//!
//! Handlers here are the only callers of validation and persistence that
//! face a user. They produce either a response carrying a flash message or
//! an [`ApiError`] whose `Display` is the flash message.

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
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_persistence_error};
pub use handlers::{
    create_artist, create_show, create_venue, delete_artist, delete_venue, edit_artist,
    edit_venue, get_artist_form, get_venue_form, list_artists, list_shows, list_venues,
    search_artists, search_venues, show_artist, show_venue,
};
pub use request_response::{
    ArtistFormResponse, DeleteResponse, ListArtistsResponse, ListVenuesResponse, MutationResponse,
    SearchResponse, VenueFormResponse,
};
