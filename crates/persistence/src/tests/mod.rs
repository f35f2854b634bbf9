// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod artist_tests;
mod initialization_tests;

use fyyur_domain::{Artist, ArtistId, Genre, NewShow, UsState, Venue, VenueId};
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::SqlitePersistence;

/// The fixed instant every test treats as "now".
pub const NOW: OffsetDateTime = datetime!(2030-06-15 12:00:00 UTC);

pub fn create_test_venue(name: &str, city: &str, state: UsState) -> Venue {
    Venue {
        name: name.to_string(),
        city: city.to_string(),
        state,
        address: String::from("1015 Folsom Street"),
        phone: Some(String::from("+1 415-000-1234")),
        image_link: String::from("https://images.example.com/venue.jpg"),
        facebook_link: Some(String::from("https://www.facebook.com/venue")),
        website: String::from("https://www.venue.example.com"),
        seeking_talent: true,
        seeking_description: Some(String::from("Looking for local artists")),
        genres: vec![Genre::Jazz, Genre::Reggae, Genre::Soul],
    }
}

pub fn create_test_artist(name: &str) -> Artist {
    Artist {
        name: name.to_string(),
        city: String::from("San Francisco"),
        state: UsState::CA,
        phone: Some(String::from("+1 212-226-3000")),
        image_link: String::from("https://images.example.com/artist.jpg"),
        facebook_link: None,
        website: String::from("https://www.artist.example.com"),
        seeking_venue: false,
        seeking_description: None,
        genres: vec![Genre::RockNRoll],
    }
}

pub fn create_test_show(
    venue_id: VenueId,
    artist_id: ArtistId,
    offset: Duration,
) -> NewShow {
    NewShow {
        venue_id,
        artist_id,
        start_time: NOW + offset,
    }
}

/// Creates a database holding one venue and one artist.
pub fn create_seeded_persistence() -> (SqlitePersistence, VenueId, ArtistId) {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let venue_id: VenueId = persistence
        .create_venue(&create_test_venue("The Musical Hop", "San Francisco", UsState::CA))
        .unwrap();
    let artist_id: ArtistId = persistence
        .create_artist(&create_test_artist("Guns N Petals"))
        .unwrap();
    (persistence, venue_id, artist_id)
}
