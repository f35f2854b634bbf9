// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod run_tests;

use std::io::Cursor;

use fyyur_persistence::Persistence;
use time::{OffsetDateTime, macros::datetime};

use crate::commands::{Command, run};
use crate::error::CliError;

pub const NOW: OffsetDateTime = datetime!(2030-06-15 12:00:00 UTC);

pub const VENUE_FORM: &str = r#"{
    "name": "The Fillmore",
    "city": "San Francisco",
    "state": "CA",
    "address": "1805 Geary Blvd",
    "phone": "+1 415-346-6000",
    "image_link": "https://images.example.com/fillmore.jpg",
    "website": "https://www.thefillmore.com",
    "genres": ["Rock n Roll", "Jazz"],
    "seeking_talent": true,
    "seeking_description": "Looking for local openers"
}"#;

pub const ARTIST_FORM: &str = r#"{
    "name": "Guns N Petals",
    "city": "San Francisco",
    "state": "CA",
    "image_link": "https://images.example.com/petals.jpg",
    "website": "https://www.gunsnpetalsband.com",
    "genres": ["Rock n Roll"]
}"#;

/// Parses `argv` (without the database flag) into a command.
pub fn parse_command(argv: &[&str]) -> Command {
    let mut full: Vec<&str> = vec!["fyyur", "--database", ":memory:"];
    full.extend_from_slice(argv);
    <crate::Args as clap::Parser>::try_parse_from(full)
        .unwrap()
        .command
}

/// Runs a command with `stdin` as form input and returns stdout as JSON.
pub fn run_json(
    persistence: &mut Persistence,
    argv: &[&str],
    stdin: &str,
) -> Result<serde_json::Value, CliError> {
    let mut out: Vec<u8> = Vec::new();
    run(
        parse_command(argv),
        persistence,
        Cursor::new(stdin.as_bytes()),
        &mut out,
        NOW,
    )?;
    Ok(serde_json::from_slice(&out).unwrap())
}
