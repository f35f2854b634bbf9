// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use fyyur_domain::{Venue, VenueId};
use tracing::{debug, info};

use crate::data_models::VenueChangeset;
use crate::diesel_schema::{shows, venues};
use crate::error::PersistenceError;

/// Inserts a venue and returns its new id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `venue` - The validated venue
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_venue(
    conn: &mut SqliteConnection,
    venue: &Venue,
) -> Result<VenueId, PersistenceError> {
    let changeset: VenueChangeset<'_> = VenueChangeset::from_venue(venue)?;

    conn.immediate_transaction(|conn| {
        let venue_id: i64 = diesel::insert_into(venues::table)
            .values(&changeset)
            .returning(venues::venue_id)
            .get_result(conn)?;
        info!(venue_id, name = %venue.name, "Created venue");
        Ok(VenueId::new(venue_id))
    })
}

/// Replaces every column of an existing venue.
///
/// Optional fields absent from `venue` are cleared.
///
/// # Errors
///
/// Returns `VenueNotFound` if no such venue exists.
pub fn update_venue(
    conn: &mut SqliteConnection,
    venue_id: VenueId,
    venue: &Venue,
) -> Result<(), PersistenceError> {
    let changeset: VenueChangeset<'_> = VenueChangeset::from_venue(venue)?;

    conn.immediate_transaction(|conn| {
        let updated: usize = diesel::update(venues::table.find(venue_id.value()))
            .set(&changeset)
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::VenueNotFound(venue_id.value()));
        }

        info!(venue_id = venue_id.value(), name = %venue.name, "Updated venue");
        Ok(())
    })
}

/// Deletes a venue and every show held there.
///
/// Both deletes run in one transaction. Returns the number of shows
/// removed.
///
/// # Errors
///
/// Returns `VenueNotFound` if no such venue exists; nothing is removed.
pub fn delete_venue(
    conn: &mut SqliteConnection,
    venue_id: VenueId,
) -> Result<usize, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let removed_shows: usize =
            diesel::delete(shows::table.filter(shows::venue_id.eq(venue_id.value())))
                .execute(conn)?;
        debug!(venue_id = venue_id.value(), removed_shows, "Removed venue shows");

        let removed: usize = diesel::delete(venues::table.find(venue_id.value())).execute(conn)?;
        if removed == 0 {
            return Err(PersistenceError::VenueNotFound(venue_id.value()));
        }

        info!(venue_id = venue_id.value(), removed_shows, "Deleted venue");
        Ok(removed_shows)
    })
}
