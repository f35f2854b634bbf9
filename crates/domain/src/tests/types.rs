// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;
use std::str::FromStr;

use crate::{ArtistId, DomainError, Genre, UsState, VenueId};

#[test]
fn test_genre_enumeration_has_nineteen_distinct_labels() {
    let labels: HashSet<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
    assert_eq!(labels.len(), 19);
}

#[test]
fn test_genre_round_trips_through_label() {
    for genre in Genre::ALL {
        assert_eq!(Genre::from_str(genre.as_str()), Ok(genre));
    }
}

#[test]
fn test_genre_parse_is_exact() {
    assert_eq!(Genre::from_str("R&B"), Ok(Genre::RhythmAndBlues));
    assert_eq!(Genre::from_str("Hip-Hop"), Ok(Genre::HipHop));
    assert!(matches!(
        Genre::from_str("jazz"),
        Err(DomainError::InvalidGenre(_))
    ));
    assert!(Genre::from_str("Polka").is_err());
}

#[test]
fn test_genre_serializes_as_label() {
    let json: String = serde_json::to_string(&Genre::MusicalTheatre).unwrap();
    assert_eq!(json, "\"Musical Theatre\"");

    let genre: Genre = serde_json::from_str("\"Rock n Roll\"").unwrap();
    assert_eq!(genre, Genre::RockNRoll);
}

#[test]
fn test_state_enumeration_has_fifty_one_codes() {
    let codes: HashSet<&str> = UsState::ALL.iter().map(UsState::as_str).collect();
    assert_eq!(codes.len(), 51);
    assert!(codes.contains("DC"));
    assert!(codes.iter().all(|code| code.len() == 2));
}

#[test]
fn test_state_parse() {
    assert_eq!(UsState::from_str("CA"), Ok(UsState::CA));
    assert!(matches!(
        UsState::from_str("PR"),
        Err(DomainError::InvalidState(_))
    ));
    assert!(UsState::from_str("ca").is_err());
}

#[test]
fn test_entity_ids_parse_positive_integers_only() {
    assert_eq!(VenueId::from_str("12"), Ok(VenueId::new(12)));
    assert_eq!(ArtistId::from_str(" 7 "), Ok(ArtistId::new(7)));
    assert!(VenueId::from_str("0").is_err());
    assert!(VenueId::from_str("-3").is_err());
    assert!(ArtistId::from_str("four").is_err());
}

#[test]
fn test_entity_ids_serialize_transparently() {
    let json: String = serde_json::to_string(&VenueId::new(5)).unwrap();
    assert_eq!(json, "5");
}
