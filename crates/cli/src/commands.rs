// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch to the API handlers.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;
use fyyur_domain::{ArtistForm, ArtistId, ShowForm, VenueForm, VenueId};
use fyyur_persistence::Persistence;
use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::CliError;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Manage venues
    Venues {
        #[command(subcommand)]
        action: VenueCommand,
    },

    /// Manage artists
    Artists {
        #[command(subcommand)]
        action: ArtistCommand,
    },

    /// Manage shows
    Shows {
        #[command(subcommand)]
        action: ShowCommand,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum VenueCommand {
    /// List venues grouped by city and state
    List,

    /// Search venue names, ignoring case
    Search { term: String },

    /// Show a venue with its past and upcoming shows
    Show { id: VenueId },

    /// Create a venue from a JSON form
    Create {
        /// Form file; reads stdin when omitted or `-`
        form: Option<PathBuf>,
    },

    /// Replace a venue from a JSON form
    Edit {
        id: VenueId,
        /// Form file; reads stdin when omitted or `-`
        form: Option<PathBuf>,
    },

    /// Delete a venue and its shows
    Delete { id: VenueId },

    /// Print a venue as an editable JSON form
    Form { id: VenueId },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ArtistCommand {
    /// List artists by name
    List,

    /// Search artist names, ignoring case
    Search { term: String },

    /// Show an artist with their past and upcoming shows
    Show { id: ArtistId },

    /// Create an artist from a JSON form
    Create {
        /// Form file; reads stdin when omitted or `-`
        form: Option<PathBuf>,
    },

    /// Replace an artist from a JSON form
    Edit {
        id: ArtistId,
        /// Form file; reads stdin when omitted or `-`
        form: Option<PathBuf>,
    },

    /// Delete an artist and their shows
    Delete { id: ArtistId },

    /// Print an artist as an editable JSON form
    Form { id: ArtistId },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ShowCommand {
    /// List every show in start order
    List,

    /// Book a show from a JSON form
    Create {
        /// Form file; reads stdin when omitted or `-`
        form: Option<PathBuf>,
    },
}

/// Runs one command and writes its JSON result to `out`.
///
/// # Arguments
///
/// * `command` - The parsed subcommand
/// * `persistence` - The open database
/// * `input` - Where forms are read from when no file is given
/// * `out` - Where the result is written
/// * `now` - The instant separating past from upcoming shows
///
/// # Errors
///
/// Returns an error if the form cannot be read, the handler fails, or the
/// output cannot be written.
pub fn run<R: Read, W: Write>(
    command: Command,
    persistence: &mut Persistence,
    input: R,
    out: &mut W,
    now: OffsetDateTime,
) -> Result<(), CliError> {
    match command {
        Command::Venues { action } => run_venue(action, persistence, input, out, now),
        Command::Artists { action } => run_artist(action, persistence, input, out, now),
        Command::Shows { action } => run_show(action, persistence, input, out),
    }
}

fn run_venue<R: Read, W: Write>(
    action: VenueCommand,
    persistence: &mut Persistence,
    input: R,
    out: &mut W,
    now: OffsetDateTime,
) -> Result<(), CliError> {
    match action {
        VenueCommand::List => emit(out, &fyyur_api::list_venues(persistence, now)?),
        VenueCommand::Search { term } => {
            emit(out, &fyyur_api::search_venues(persistence, &term, now)?)
        }
        VenueCommand::Show { id } => emit(out, &fyyur_api::show_venue(persistence, id, now)?),
        VenueCommand::Create { form } => {
            let form: VenueForm = read_form(form.as_deref(), input)?;
            emit(out, &fyyur_api::create_venue(persistence, &form)?)
        }
        VenueCommand::Edit { id, form } => {
            let form: VenueForm = read_form(form.as_deref(), input)?;
            emit(out, &fyyur_api::edit_venue(persistence, id, &form)?)
        }
        VenueCommand::Delete { id } => emit(out, &fyyur_api::delete_venue(persistence, id)?),
        VenueCommand::Form { id } => emit(out, &fyyur_api::get_venue_form(persistence, id)?),
    }
}

fn run_artist<R: Read, W: Write>(
    action: ArtistCommand,
    persistence: &mut Persistence,
    input: R,
    out: &mut W,
    now: OffsetDateTime,
) -> Result<(), CliError> {
    match action {
        ArtistCommand::List => emit(out, &fyyur_api::list_artists(persistence)?),
        ArtistCommand::Search { term } => {
            emit(out, &fyyur_api::search_artists(persistence, &term, now)?)
        }
        ArtistCommand::Show { id } => emit(out, &fyyur_api::show_artist(persistence, id, now)?),
        ArtistCommand::Create { form } => {
            let form: ArtistForm = read_form(form.as_deref(), input)?;
            emit(out, &fyyur_api::create_artist(persistence, &form)?)
        }
        ArtistCommand::Edit { id, form } => {
            let form: ArtistForm = read_form(form.as_deref(), input)?;
            emit(out, &fyyur_api::edit_artist(persistence, id, &form)?)
        }
        ArtistCommand::Delete { id } => emit(out, &fyyur_api::delete_artist(persistence, id)?),
        ArtistCommand::Form { id } => emit(out, &fyyur_api::get_artist_form(persistence, id)?),
    }
}

fn run_show<R: Read, W: Write>(
    action: ShowCommand,
    persistence: &mut Persistence,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    match action {
        ShowCommand::List => emit(out, &fyyur_api::list_shows(persistence)?),
        ShowCommand::Create { form } => {
            let form: ShowForm = read_form(form.as_deref(), input)?;
            emit(out, &fyyur_api::create_show(persistence, &form)?)
        }
    }
}

/// Decodes a JSON form from `path`, or from `input` when no path (or `-`)
/// is given. Missing fields take their form defaults.
fn read_form<T: DeserializeOwned, R: Read>(path: Option<&Path>, input: R) -> Result<T, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading form from file");
            let text: String = std::fs::read_to_string(path)
                .map_err(|e| CliError::InvalidInput(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&text).map_err(|e| CliError::InvalidInput(e.to_string()))
        }
        _ => {
            debug!("Reading form from stdin");
            serde_json::from_reader(input).map_err(|e| CliError::InvalidInput(e.to_string()))
        }
    }
}

fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| CliError::Output(e.to_string()))?;
    writeln!(out).map_err(|e| CliError::Output(e.to_string()))
}
