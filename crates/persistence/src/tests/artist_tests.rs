// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_domain::{Artist, ArtistId, Genre, UsState, VenueId};
use time::Duration;

use super::{NOW, create_seeded_persistence, create_test_artist, create_test_show, create_test_venue};
use crate::{ArtistDetail, ArtistSummary, PersistenceError, SearchResults, SqlitePersistence};

#[test]
fn test_create_then_get_artist_returns_same_fields() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let artist: Artist = create_test_artist("Guns N Petals");

    let artist_id: ArtistId = persistence.create_artist(&artist).unwrap();

    assert_eq!(persistence.get_artist(artist_id).unwrap(), artist);
}

#[test]
fn test_create_then_detail_matches_and_has_no_shows() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut artist: Artist = create_test_artist("The Wild Sax Band");
    artist.seeking_venue = true;
    artist.seeking_description = Some("z".repeat(400));
    artist.genres = vec![Genre::Jazz, Genre::Classical];

    let artist_id: ArtistId = persistence.create_artist(&artist).unwrap();
    let detail: ArtistDetail = persistence.get_artist_detail(artist_id, NOW).unwrap();

    assert_eq!(detail.id, artist_id);
    assert_eq!(detail.artist, artist);
    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 0);
}

#[test]
fn test_list_artists_orders_by_name() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
        persistence.create_artist(&create_test_artist(name)).unwrap();
    }

    let artists: Vec<ArtistSummary> = persistence.list_artists().unwrap();

    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
}

#[test]
fn test_list_artists_empty_database() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.list_artists().unwrap().is_empty());
}

#[test]
fn test_update_artist_clears_absent_optionals() {
    let (mut persistence, _, artist_id) = create_seeded_persistence();
    let mut replacement: Artist = create_test_artist("Guns N Petals");
    replacement.phone = None;
    replacement.city = String::from("Austin");
    replacement.state = UsState::TX;

    persistence.update_artist(artist_id, &replacement).unwrap();

    let stored: Artist = persistence.get_artist(artist_id).unwrap();
    assert_eq!(stored.phone, None);
    assert_eq!(stored.city, "Austin");
    assert_eq!(stored.state, UsState::TX);
}

#[test]
fn test_update_missing_artist_fails_not_found() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let result: Result<(), PersistenceError> =
        persistence.update_artist(ArtistId::new(12), &create_test_artist("Nobody"));

    assert_eq!(result, Err(PersistenceError::ArtistNotFound(12)));
}

#[test]
fn test_delete_artist_removes_their_shows() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::days(2)))
        .unwrap();

    let removed: usize = persistence.delete_artist(artist_id).unwrap();

    assert_eq!(removed, 1);
    assert_eq!(persistence.count_shows().unwrap(), 0);
    assert_eq!(
        persistence
            .get_venue_detail(venue_id, NOW)
            .unwrap()
            .upcoming_shows_count,
        0
    );
    assert_eq!(
        persistence.get_artist(artist_id),
        Err(PersistenceError::ArtistNotFound(artist_id.value()))
    );
}

#[test]
fn test_delete_missing_artist_fails_not_found() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    assert_eq!(
        persistence.delete_artist(ArtistId::new(5)),
        Err(PersistenceError::ArtistNotFound(5))
    );
}

#[test]
fn test_artist_detail_splits_past_and_upcoming() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, -Duration::days(1)))
        .unwrap();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::days(1)))
        .unwrap();

    let detail: ArtistDetail = persistence.get_artist_detail(artist_id, NOW).unwrap();

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows[0].venue_id, venue_id);
    assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
    assert_eq!(
        detail.past_shows[0].venue_image_link,
        "https://images.example.com/venue.jpg"
    );
}

#[test]
fn test_artist_detail_uses_sub_second_now() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::ZERO))
        .unwrap();

    let later: ArtistDetail = persistence
        .get_artist_detail(artist_id, NOW + Duration::milliseconds(500))
        .unwrap();
    let earlier: ArtistDetail = persistence
        .get_artist_detail(artist_id, NOW - Duration::milliseconds(500))
        .unwrap();

    assert_eq!((later.past_shows_count, later.upcoming_shows_count), (1, 0));
    assert_eq!((earlier.past_shows_count, earlier.upcoming_shows_count), (0, 1));
}

#[test]
fn test_artist_detail_lists_shows_across_venues() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();
    let other: VenueId = persistence
        .create_venue(&create_test_venue("Park Square", "San Francisco", UsState::CA))
        .unwrap();
    persistence
        .create_show(&create_test_show(other, artist_id, Duration::days(4)))
        .unwrap();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::days(2)))
        .unwrap();

    let detail: ArtistDetail = persistence.get_artist_detail(artist_id, NOW).unwrap();

    let venues: Vec<VenueId> = detail.upcoming_shows.iter().map(|s| s.venue_id).collect();
    assert_eq!(venues, vec![venue_id, other]);
}

#[test]
fn test_search_artists_is_case_insensitive() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
        persistence.create_artist(&create_test_artist(name)).unwrap();
    }

    let results: SearchResults<ArtistId> = persistence.search_artists("A", NOW).unwrap();

    assert_eq!(results.count, 3);

    let results: SearchResults<ArtistId> = persistence.search_artists("band", NOW).unwrap();

    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Wild Sax Band");
}

#[test]
fn test_search_artists_counts_only_future_shows() {
    let (mut persistence, venue_id, artist_id) = create_seeded_persistence();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, -Duration::days(10)))
        .unwrap();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::days(10)))
        .unwrap();
    persistence
        .create_show(&create_test_show(venue_id, artist_id, Duration::days(20)))
        .unwrap();

    let results: SearchResults<ArtistId> = persistence.search_artists("petals", NOW).unwrap();

    assert_eq!(results.data[0].id, artist_id);
    assert_eq!(results.data[0].num_upcoming_shows, 2);
}
