// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connection setup tests.

use std::path::PathBuf;

use diesel::RunQueryDsl;
use diesel::dsl::sql;
use diesel::sql_types::Text;
use fyyur_domain::{ArtistId, UsState, VenueId};

use super::{NOW, create_test_artist, create_test_venue};
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, PersistenceError> = SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut db2: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    db1.create_venue(&create_test_venue("The Musical Hop", "San Francisco", UsState::CA))
        .unwrap();

    assert_eq!(db1.search_venues("", NOW).unwrap().count, 1);
    assert_eq!(db2.search_venues("", NOW).unwrap().count, 0);
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.list_artists().is_ok());
    assert!(persistence.list_shows().is_ok());
    assert!(persistence.list_venues_grouped_by_location(NOW).is_ok());
}

#[test]
fn test_file_database_persists_between_connections() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "fyyur_persistence_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let venue_id: VenueId = {
        let mut persistence: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .create_venue(&create_test_venue("The Musical Hop", "San Francisco", UsState::CA))
            .unwrap()
    };

    let mut reopened: SqlitePersistence = SqlitePersistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.get_venue(venue_id).unwrap().name, "The Musical Hop");

    let journal_mode: String = diesel::select(sql::<Text>("journal_mode FROM pragma_journal_mode()"))
        .get_result(&mut reopened.conn)
        .unwrap();
    assert_eq!(journal_mode, "wal");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[test]
fn test_created_ids_follow_insert_order() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let venue_ids: Vec<VenueId> = ["The Musical Hop", "Park Square", "The Dueling Pianos Bar"]
        .into_iter()
        .map(|name| {
            persistence
                .create_venue(&create_test_venue(name, "San Francisco", UsState::CA))
                .unwrap()
        })
        .collect();
    let artist_id: ArtistId = persistence
        .create_artist(&create_test_artist("Guns N Petals"))
        .unwrap();

    assert_eq!(venue_ids, vec![VenueId::new(1), VenueId::new(2), VenueId::new(3)]);
    assert_eq!(artist_id, ArtistId::new(1));
    assert_eq!(persistence.get_venue(venue_ids[1]).unwrap().name, "Park Square");
}
