// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Fyyur booking catalog.
//!
//! This crate stores venues, artists and shows in `SQLite` through Diesel
//! and exposes the listing, search and detail views built on top of them.
//!
//! ## Storage
//!
//! - Genres are stored as a JSON array of their display labels
//! - Booleans are stored as `0`/`1` integers
//! - Show start times are stored as fixed-width UTC text
//!   (`YYYY-MM-DDTHH:MM:SSZ`), so text order is chronological order
//! - `shows` references both parents with `ON DELETE CASCADE`
//!
//! ## Time
//!
//! Every query that splits shows into past and upcoming takes `now` as an
//! argument. The caller decides what "now" is.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory databases
//! - Each `new_in_memory()` call gets its own database
//! - Foreign key enforcement is verified on every connection

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

use diesel::SqliteConnection;
use fyyur_domain::{Artist, ArtistId, NewShow, ShowId, Venue, VenueId};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod connection;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    ArtistDetail, ArtistShow, ArtistSummary, SearchHit, SearchResults, ShowListing, VenueDetail,
    VenueGroup, VenueShow, VenueSummary,
};
pub use error::PersistenceError;

/// Type alias for callers that name the storage engine explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for venues, artists and shows.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so separate
    /// adapters never see each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = connection::open(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if missing and migrated to the current schema.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = connection::open(path_str)?;
        connection::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        connection::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Venues
    // ========================================================================

    /// Stores a new venue.
    ///
    /// # Arguments
    ///
    /// * `venue` - A venue that has already passed form validation
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_venue(&mut self, venue: &Venue) -> Result<VenueId, PersistenceError> {
        mutations::create_venue(&mut self.conn, venue)
    }

    /// Replaces every field of an existing venue.
    ///
    /// # Errors
    ///
    /// Returns `VenueNotFound` if no such venue exists.
    pub fn update_venue(&mut self, venue_id: VenueId, venue: &Venue) -> Result<(), PersistenceError> {
        mutations::update_venue(&mut self.conn, venue_id, venue)
    }

    /// Deletes a venue and its shows. Returns the number of shows removed.
    ///
    /// # Errors
    ///
    /// Returns `VenueNotFound` if no such venue exists.
    pub fn delete_venue(&mut self, venue_id: VenueId) -> Result<usize, PersistenceError> {
        mutations::delete_venue(&mut self.conn, venue_id)
    }

    /// Loads a venue.
    ///
    /// # Errors
    ///
    /// Returns `VenueNotFound` if no such venue exists.
    pub fn get_venue(&mut self, venue_id: VenueId) -> Result<Venue, PersistenceError> {
        queries::get_venue(&mut self.conn, venue_id)
    }

    /// Lists all venues grouped by (city, state).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_venues_grouped_by_location(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<Vec<VenueGroup>, PersistenceError> {
        queries::list_venues_grouped_by_location(&mut self.conn, now)
    }

    /// Searches venue names, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_venues(
        &mut self,
        term: &str,
        now: OffsetDateTime,
    ) -> Result<SearchResults<VenueId>, PersistenceError> {
        queries::search_venues(&mut self.conn, term, now)
    }

    /// Loads a venue with its past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns `VenueNotFound` if no such venue exists.
    pub fn get_venue_detail(
        &mut self,
        venue_id: VenueId,
        now: OffsetDateTime,
    ) -> Result<VenueDetail, PersistenceError> {
        queries::get_venue_detail(&mut self.conn, venue_id, now)
    }

    // ========================================================================
    // Artists
    // ========================================================================

    /// Stores a new artist.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_artist(&mut self, artist: &Artist) -> Result<ArtistId, PersistenceError> {
        mutations::create_artist(&mut self.conn, artist)
    }

    /// Replaces every field of an existing artist.
    ///
    /// # Errors
    ///
    /// Returns `ArtistNotFound` if no such artist exists.
    pub fn update_artist(
        &mut self,
        artist_id: ArtistId,
        artist: &Artist,
    ) -> Result<(), PersistenceError> {
        mutations::update_artist(&mut self.conn, artist_id, artist)
    }

    /// Deletes an artist and their shows. Returns the number of shows removed.
    ///
    /// # Errors
    ///
    /// Returns `ArtistNotFound` if no such artist exists.
    pub fn delete_artist(&mut self, artist_id: ArtistId) -> Result<usize, PersistenceError> {
        mutations::delete_artist(&mut self.conn, artist_id)
    }

    /// Loads an artist.
    ///
    /// # Errors
    ///
    /// Returns `ArtistNotFound` if no such artist exists.
    pub fn get_artist(&mut self, artist_id: ArtistId) -> Result<Artist, PersistenceError> {
        queries::get_artist(&mut self.conn, artist_id)
    }

    /// Lists every artist by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_artists(&mut self) -> Result<Vec<ArtistSummary>, PersistenceError> {
        queries::list_artists(&mut self.conn)
    }

    /// Searches artist names, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_artists(
        &mut self,
        term: &str,
        now: OffsetDateTime,
    ) -> Result<SearchResults<ArtistId>, PersistenceError> {
        queries::search_artists(&mut self.conn, term, now)
    }

    /// Loads an artist with their past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns `ArtistNotFound` if no such artist exists.
    pub fn get_artist_detail(
        &mut self,
        artist_id: ArtistId,
        now: OffsetDateTime,
    ) -> Result<ArtistDetail, PersistenceError> {
        queries::get_artist_detail(&mut self.conn, artist_id, now)
    }

    // ========================================================================
    // Shows
    // ========================================================================

    /// Records a show.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the venue or artist does not exist.
    pub fn create_show(&mut self, show: &NewShow) -> Result<ShowId, PersistenceError> {
        mutations::create_show(&mut self.conn, show)
    }

    /// Lists every show with venue and artist names, in start order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shows(&mut self) -> Result<Vec<ShowListing>, PersistenceError> {
        queries::list_shows(&mut self.conn)
    }

    /// Counts every stored show.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_shows(&mut self) -> Result<i64, PersistenceError> {
        queries::count_shows(&mut self.conn)
    }
}
