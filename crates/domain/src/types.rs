// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// A music genre a venue hosts or an artist plays.
///
/// The set is closed: anything outside these nineteen values is rejected
/// at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    #[serde(rename = "Heavy Metal")]
    HeavyMetal,
    Instrumental,
    Jazz,
    #[serde(rename = "Musical Theatre")]
    MusicalTheatre,
    Pop,
    Punk,
    #[serde(rename = "R&B")]
    RhythmAndBlues,
    Reggae,
    #[serde(rename = "Rock n Roll")]
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre, in display order.
    pub const ALL: [Self; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RhythmAndBlues,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    /// Returns the display and storage label of this genre.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RhythmAndBlues => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| DomainError::InvalidGenre(s.to_string()))
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Two-letter postal code of a US state or the District of Columbia.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UsState {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

impl UsState {
    /// Every state code, in the order offered on the forms.
    pub const ALL: [Self; 51] = [
        Self::AL,
        Self::AK,
        Self::AZ,
        Self::AR,
        Self::CA,
        Self::CO,
        Self::CT,
        Self::DE,
        Self::DC,
        Self::FL,
        Self::GA,
        Self::HI,
        Self::ID,
        Self::IL,
        Self::IN,
        Self::IA,
        Self::KS,
        Self::KY,
        Self::LA,
        Self::ME,
        Self::MT,
        Self::NE,
        Self::NV,
        Self::NH,
        Self::NJ,
        Self::NM,
        Self::NY,
        Self::NC,
        Self::ND,
        Self::OH,
        Self::OK,
        Self::OR,
        Self::MD,
        Self::MA,
        Self::MI,
        Self::MN,
        Self::MS,
        Self::MO,
        Self::PA,
        Self::RI,
        Self::SC,
        Self::SD,
        Self::TN,
        Self::TX,
        Self::UT,
        Self::VT,
        Self::VA,
        Self::WA,
        Self::WV,
        Self::WI,
        Self::WY,
    ];

    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AL => "AL",
            Self::AK => "AK",
            Self::AZ => "AZ",
            Self::AR => "AR",
            Self::CA => "CA",
            Self::CO => "CO",
            Self::CT => "CT",
            Self::DE => "DE",
            Self::DC => "DC",
            Self::FL => "FL",
            Self::GA => "GA",
            Self::HI => "HI",
            Self::ID => "ID",
            Self::IL => "IL",
            Self::IN => "IN",
            Self::IA => "IA",
            Self::KS => "KS",
            Self::KY => "KY",
            Self::LA => "LA",
            Self::ME => "ME",
            Self::MT => "MT",
            Self::NE => "NE",
            Self::NV => "NV",
            Self::NH => "NH",
            Self::NJ => "NJ",
            Self::NM => "NM",
            Self::NY => "NY",
            Self::NC => "NC",
            Self::ND => "ND",
            Self::OH => "OH",
            Self::OK => "OK",
            Self::OR => "OR",
            Self::MD => "MD",
            Self::MA => "MA",
            Self::MI => "MI",
            Self::MN => "MN",
            Self::MS => "MS",
            Self::MO => "MO",
            Self::PA => "PA",
            Self::RI => "RI",
            Self::SC => "SC",
            Self::SD => "SD",
            Self::TN => "TN",
            Self::TX => "TX",
            Self::UT => "UT",
            Self::VT => "VT",
            Self::VA => "VA",
            Self::WA => "WA",
            Self::WV => "WV",
            Self::WI => "WI",
            Self::WY => "WY",
        }
    }
}

impl FromStr for UsState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::InvalidState(s.to_string()))
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a database-assigned identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i64>() {
                    Ok(value) if value > 0 => Ok(Self(value)),
                    _ => Err(DomainError::InvalidId(s.to_string())),
                }
            }
        }
    };
}

entity_id! {
    /// Identifier of a persisted venue.
    VenueId
}

entity_id! {
    /// Identifier of a persisted artist.
    ArtistId
}

entity_id! {
    /// Identifier of a persisted show.
    ShowId
}

/// A validated venue, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    /// Ordered, duplicate-free.
    pub genres: Vec<Genre>,
}

/// A validated artist, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    /// Ordered, duplicate-free.
    pub genres: Vec<Genre>,
}

/// A validated show booking.
///
/// `start_time` is normalised to UTC with whole-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}
