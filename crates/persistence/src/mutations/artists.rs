// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Artist mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use fyyur_domain::{Artist, ArtistId};
use tracing::{debug, info};

use crate::data_models::ArtistChangeset;
use crate::diesel_schema::{artists, shows};
use crate::error::PersistenceError;

/// Inserts an artist and returns its new id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_artist(
    conn: &mut SqliteConnection,
    artist: &Artist,
) -> Result<ArtistId, PersistenceError> {
    let changeset: ArtistChangeset<'_> = ArtistChangeset::from_artist(artist)?;

    conn.immediate_transaction(|conn| {
        let artist_id: i64 = diesel::insert_into(artists::table)
            .values(&changeset)
            .returning(artists::artist_id)
            .get_result(conn)?;
        info!(artist_id, name = %artist.name, "Created artist");
        Ok(ArtistId::new(artist_id))
    })
}

/// Replaces every column of an existing artist.
///
/// # Errors
///
/// Returns `ArtistNotFound` if no such artist exists.
pub fn update_artist(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
    artist: &Artist,
) -> Result<(), PersistenceError> {
    let changeset: ArtistChangeset<'_> = ArtistChangeset::from_artist(artist)?;

    conn.immediate_transaction(|conn| {
        let updated: usize = diesel::update(artists::table.find(artist_id.value()))
            .set(&changeset)
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::ArtistNotFound(artist_id.value()));
        }

        info!(artist_id = artist_id.value(), name = %artist.name, "Updated artist");
        Ok(())
    })
}

/// Deletes an artist and every show they play.
///
/// # Errors
///
/// Returns `ArtistNotFound` if no such artist exists; nothing is removed.
pub fn delete_artist(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
) -> Result<usize, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let removed_shows: usize =
            diesel::delete(shows::table.filter(shows::artist_id.eq(artist_id.value())))
                .execute(conn)?;
        debug!(artist_id = artist_id.value(), removed_shows, "Removed artist shows");

        let removed: usize =
            diesel::delete(artists::table.find(artist_id.value())).execute(conn)?;
        if removed == 0 {
            return Err(PersistenceError::ArtistNotFound(artist_id.value()));
        }

        info!(artist_id = artist_id.value(), removed_shows, "Deleted artist");
        Ok(removed_shows)
    })
}
