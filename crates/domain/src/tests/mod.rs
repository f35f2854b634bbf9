// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod timestamp;
mod types;

use crate::{ArtistForm, ShowForm, VenueForm};

pub fn create_valid_venue_form() -> VenueForm {
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

pub fn create_valid_artist_form() -> ArtistForm {
    ArtistForm {
        name: String::from("Guns N Petals"),
        city: String::from("San Francisco"),
        state: String::from("CA"),
        phone: String::from("+1 212-226-3000"),
        image_link: String::from("https://images.example.com/petals.jpg"),
        facebook_link: String::new(),
        website: String::from("https://www.gunsnpetalsband.com"),
        genres: vec![String::from("Rock n Roll")],
        seeking_venue: false,
        seeking_description: String::new(),
    }
}

pub fn create_valid_show_form() -> ShowForm {
    ShowForm {
        artist_id: String::from("4"),
        venue_id: String::from("1"),
        start_time: String::from("2035-04-01 20:00:00"),
    }
}
