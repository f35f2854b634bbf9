// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Every connection gets the same pragmas, is brought up to the embedded
//! schema and must report foreign key enforcement before it is handed to
//! [`Persistence`](crate::Persistence). File databases additionally run in
//! WAL mode.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

/// Schema migrations for the venues, artists and shows tables.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applied to every new connection, in order.
const CONNECTION_PRAGMAS: &[&str] = &["PRAGMA foreign_keys = ON", "PRAGMA busy_timeout = 5000"];

/// Opens `database_url`, applies the connection pragmas and migrates it.
///
/// # Errors
///
/// Returns an error if connecting, configuring, migrating or the foreign
/// key check fails.
pub fn open(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Opening SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    for pragma in CONNECTION_PRAGMAS {
        diesel::sql_query(*pragma)
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("{pragma}: {e}")))?;
    }

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    info!(count = applied.len(), "Applied SQLite migrations");

    verify_foreign_key_enforcement(&mut conn)?;
    Ok(conn)
}

/// Fails unless the connection enforces foreign keys.
///
/// Show reference checks and the cascading deletes rely on it.
///
/// # Errors
///
/// Returns `ForeignKeyEnforcementNotEnabled` if enforcement is off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let enabled: i32 =
        diesel::select(sql::<Integer>("foreign_keys FROM pragma_foreign_keys()")).get_result(conn)?;

    if enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Switches a file database to write-ahead logging.
///
/// `SQLite` answers with the mode it ended up in; anything but `wal` is
/// logged and left as is.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let mode: JournalMode = diesel::sql_query("PRAGMA journal_mode = WAL")
        .get_result(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    if mode.journal_mode.eq_ignore_ascii_case("wal") {
        debug!("SQLite journal mode is WAL");
    } else {
        warn!(journal_mode = %mode.journal_mode, "SQLite did not switch to WAL");
    }
    Ok(())
}
