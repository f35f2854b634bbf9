// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use fyyur_domain::{ArtistForm, ArtistId, ShowForm, VenueForm, VenueId};
use fyyur_persistence::Persistence;
use time::{OffsetDateTime, macros::datetime};

use crate::{create_artist, create_venue};

/// The fixed instant handlers are queried at.
pub const NOW: OffsetDateTime = datetime!(2030-06-15 12:00:00 UTC);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_venue_form() -> VenueForm {
    VenueForm {
        name: String::from("The Fillmore"),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        address: String::from("1805 Geary Blvd"),
        phone: String::from("+1 415-346-6000"),
        image_link: String::from("https://images.example.com/fillmore.jpg"),
        facebook_link: String::from("https://www.facebook.com/TheFillmore"),
        website: String::from("https://www.thefillmore.com"),
        genres: vec![String::from("Rock n Roll"), String::from("Jazz")],
        seeking_talent: true,
        seeking_description: String::from("Looking for local openers"),
    }
}

pub fn create_test_artist_form() -> ArtistForm {
    ArtistForm {
        name: String::from("Guns N Petals"),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        phone: String::from("+1 212-226-3000"),
        image_link: String::from("https://images.example.com/petals.jpg"),
        facebook_link: String::new(),
        website: String::from("https://www.gunsnpetalsband.com"),
        genres: vec![String::from("Rock n Roll")],
        seeking_venue: true,
        seeking_description: String::from("Looking for shows in the Bay Area"),
    }
}

pub fn create_test_show_form(venue_id: VenueId, artist_id: ArtistId, start: &str) -> ShowForm {
    ShowForm {
        artist_id: artist_id.to_string(),
        venue_id: venue_id.to_string(),
        start_time: start.to_string(),
    }
}

/// Creates a database holding one venue and one artist.
pub fn create_seeded_persistence() -> (Persistence, VenueId, ArtistId) {
    let mut persistence: Persistence = create_test_persistence();
    let venue_id: VenueId = create_venue(&mut persistence, &create_test_venue_form())
        .unwrap()
        .id;
    let artist_id: ArtistId = create_artist(&mut persistence, &create_test_artist_form())
        .unwrap()
        .id;
    (persistence, venue_id, artist_id)
}
