// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use fyyur_domain::{NewShow, ShowId, format_timestamp};
use tracing::info;

use crate::diesel_schema::shows;
use crate::error::PersistenceError;
use crate::queries::{artist_exists, venue_exists};

/// Records a show linking an existing venue and artist.
///
/// Both references are checked inside the insert transaction; the foreign
/// keys on `shows` enforce the same rule at the storage level.
///
/// # Errors
///
/// Returns `ConstraintViolation` if the venue or artist does not exist.
/// No row is written in that case.
pub fn create_show(conn: &mut SqliteConnection, show: &NewShow) -> Result<ShowId, PersistenceError> {
    let start_time: String = format_timestamp(show.start_time)?;

    conn.immediate_transaction(|conn| {
        if !venue_exists(conn, show.venue_id)? {
            return Err(PersistenceError::ConstraintViolation(format!(
                "venue {} does not exist",
                show.venue_id
            )));
        }
        if !artist_exists(conn, show.artist_id)? {
            return Err(PersistenceError::ConstraintViolation(format!(
                "artist {} does not exist",
                show.artist_id
            )));
        }

        let show_id: i64 = diesel::insert_into(shows::table)
            .values((
                shows::venue_id.eq(show.venue_id.value()),
                shows::artist_id.eq(show.artist_id.value()),
                shows::start_time.eq(&start_time),
            ))
            .returning(shows::show_id)
            .get_result(conn)?;
        info!(
            show_id,
            venue_id = show.venue_id.value(),
            artist_id = show.artist_id.value(),
            start_time = %start_time,
            "Created show"
        );
        Ok(ShowId::new(show_id))
    })
}
