// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each handler validates its input, calls the store, and turns the
//! outcome into a response or an `ApiError`. Forms are borrowed and never
//! modified, so a rejected submission can be shown again as entered.
//!
//! Read handlers take `now` from the caller; it decides which shows count
//! as past and which as upcoming.

use fyyur_domain::{
    Artist, ArtistForm, ArtistId, FieldErrors, NewShow, ShowForm, ShowId, Venue, VenueForm,
    VenueId, validate_artist, validate_show, validate_venue,
};
use fyyur_persistence::{
    ArtistDetail, Persistence, PersistenceError, ShowListing, VenueDetail, VenueGroup,
};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    ArtistFormResponse, DeleteResponse, ListArtistsResponse, ListVenuesResponse, MutationResponse,
    SearchResponse, VenueFormResponse,
};

fn rejected(entity: &str, errors: FieldErrors) -> ApiError {
    warn!(entity, failing_fields = errors.len(), "Rejected {entity} submission");
    ApiError::ValidationFailed {
        entity: entity.to_string(),
        errors,
    }
}

// ============================================================================
// Venues
// ============================================================================

/// Validates and stores a new venue.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `form` - The submitted venue form
///
/// # Errors
///
/// Returns `ValidationFailed` if any field is invalid, or `OperationFailed`
/// if the store rejects the insert.
pub fn create_venue(
    persistence: &mut Persistence,
    form: &VenueForm,
) -> Result<MutationResponse<VenueId>, ApiError> {
    let venue: Venue = validate_venue(form).map_err(|errors| rejected("venue", errors))?;

    let venue_id: VenueId = persistence.create_venue(&venue).map_err(|e| {
        translate_persistence_error(
            e,
            &format!("An error occurred. Venue {} could not be listed.", venue.name),
        )
    })?;

    info!(venue_id = venue_id.value(), "Venue listed");
    Ok(MutationResponse {
        id: venue_id,
        message: format!("Venue {} was successfully listed!", venue.name),
    })
}

/// Validates a venue form and replaces the stored venue with it.
///
/// # Errors
///
/// Returns `ValidationFailed` if any field is invalid, or
/// `ResourceNotFound` if the venue does not exist.
pub fn edit_venue(
    persistence: &mut Persistence,
    venue_id: VenueId,
    form: &VenueForm,
) -> Result<MutationResponse<VenueId>, ApiError> {
    let venue: Venue = validate_venue(form).map_err(|errors| rejected("venue", errors))?;

    persistence.update_venue(venue_id, &venue).map_err(|e| {
        translate_persistence_error(
            e,
            &format!("An error occurred. Venue {} could not be updated.", venue.name),
        )
    })?;

    Ok(MutationResponse {
        id: venue_id,
        message: format!("Venue {} was successfully updated!", venue.name),
    })
}

/// Deletes a venue together with its shows.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the venue does not exist.
pub fn delete_venue(
    persistence: &mut Persistence,
    venue_id: VenueId,
) -> Result<DeleteResponse<VenueId>, ApiError> {
    let failure: String = format!("An error occurred. Venue {venue_id} could not be deleted.");
    let venue: Venue = persistence
        .get_venue(venue_id)
        .map_err(|e| translate_persistence_error(e, &failure))?;
    let removed_shows: usize = persistence
        .delete_venue(venue_id)
        .map_err(|e| translate_persistence_error(e, &failure))?;

    Ok(DeleteResponse {
        id: venue_id,
        removed_shows,
        message: format!("Venue {} was successfully deleted!", venue.name),
    })
}

/// Loads a stored venue into its edit form.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the venue does not exist.
pub fn get_venue_form(
    persistence: &mut Persistence,
    venue_id: VenueId,
) -> Result<VenueFormResponse, ApiError> {
    let venue: Venue = persistence.get_venue(venue_id).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The venue could not be loaded.")
    })?;

    Ok(VenueFormResponse {
        venue_id,
        form: VenueForm::from(&venue),
    })
}

/// Lists every venue grouped by location.
///
/// # Errors
///
/// Returns `OperationFailed` if the store query fails.
pub fn list_venues(
    persistence: &mut Persistence,
    now: OffsetDateTime,
) -> Result<ListVenuesResponse, ApiError> {
    let areas: Vec<VenueGroup> = persistence
        .list_venues_grouped_by_location(now)
        .map_err(|e| {
            translate_persistence_error(e, "An error occurred. Venues could not be loaded.")
        })?;
    Ok(ListVenuesResponse { areas })
}

/// Searches venues by name.
///
/// # Errors
///
/// Returns `OperationFailed` if the store query fails.
pub fn search_venues(
    persistence: &mut Persistence,
    search_term: &str,
    now: OffsetDateTime,
) -> Result<SearchResponse<VenueId>, ApiError> {
    let results = persistence.search_venues(search_term, now).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The search could not be completed.")
    })?;
    Ok(SearchResponse {
        search_term: search_term.to_string(),
        results,
    })
}

/// Loads a venue page.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the venue does not exist.
pub fn show_venue(
    persistence: &mut Persistence,
    venue_id: VenueId,
    now: OffsetDateTime,
) -> Result<VenueDetail, ApiError> {
    persistence.get_venue_detail(venue_id, now).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The venue could not be loaded.")
    })
}

// ============================================================================
// Artists
// ============================================================================

/// Validates and stores a new artist.
///
/// # Errors
///
/// Returns `ValidationFailed` if any field is invalid, or `OperationFailed`
/// if the store rejects the insert.
pub fn create_artist(
    persistence: &mut Persistence,
    form: &ArtistForm,
) -> Result<MutationResponse<ArtistId>, ApiError> {
    let artist: Artist = validate_artist(form).map_err(|errors| rejected("artist", errors))?;

    let artist_id: ArtistId = persistence.create_artist(&artist).map_err(|e| {
        translate_persistence_error(
            e,
            &format!("An error occurred. Artist {} could not be listed.", artist.name),
        )
    })?;

    info!(artist_id = artist_id.value(), "Artist listed");
    Ok(MutationResponse {
        id: artist_id,
        message: format!("Artist {} was successfully listed!", artist.name),
    })
}

/// Validates an artist form and replaces the stored artist with it.
///
/// # Errors
///
/// Returns `ValidationFailed` if any field is invalid, or
/// `ResourceNotFound` if the artist does not exist.
pub fn edit_artist(
    persistence: &mut Persistence,
    artist_id: ArtistId,
    form: &ArtistForm,
) -> Result<MutationResponse<ArtistId>, ApiError> {
    let artist: Artist = validate_artist(form).map_err(|errors| rejected("artist", errors))?;

    persistence.update_artist(artist_id, &artist).map_err(|e| {
        translate_persistence_error(
            e,
            &format!("An error occurred. Artist {} could not be updated.", artist.name),
        )
    })?;

    Ok(MutationResponse {
        id: artist_id,
        message: format!("Artist {} was successfully updated!", artist.name),
    })
}

/// Deletes an artist together with their shows.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the artist does not exist.
pub fn delete_artist(
    persistence: &mut Persistence,
    artist_id: ArtistId,
) -> Result<DeleteResponse<ArtistId>, ApiError> {
    let failure: String = format!("An error occurred. Artist {artist_id} could not be deleted.");
    let artist: Artist = persistence
        .get_artist(artist_id)
        .map_err(|e| translate_persistence_error(e, &failure))?;
    let removed_shows: usize = persistence
        .delete_artist(artist_id)
        .map_err(|e| translate_persistence_error(e, &failure))?;

    Ok(DeleteResponse {
        id: artist_id,
        removed_shows,
        message: format!("Artist {} was successfully deleted!", artist.name),
    })
}

/// Loads a stored artist into its edit form.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the artist does not exist.
pub fn get_artist_form(
    persistence: &mut Persistence,
    artist_id: ArtistId,
) -> Result<ArtistFormResponse, ApiError> {
    let artist: Artist = persistence.get_artist(artist_id).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The artist could not be loaded.")
    })?;

    Ok(ArtistFormResponse {
        artist_id,
        form: ArtistForm::from(&artist),
    })
}

/// Lists every artist by name.
///
/// # Errors
///
/// Returns `OperationFailed` if the store query fails.
pub fn list_artists(persistence: &mut Persistence) -> Result<ListArtistsResponse, ApiError> {
    let artists = persistence.list_artists().map_err(|e| {
        translate_persistence_error(e, "An error occurred. Artists could not be loaded.")
    })?;
    Ok(ListArtistsResponse { artists })
}

/// Searches artists by name.
///
/// # Errors
///
/// Returns `OperationFailed` if the store query fails.
pub fn search_artists(
    persistence: &mut Persistence,
    search_term: &str,
    now: OffsetDateTime,
) -> Result<SearchResponse<ArtistId>, ApiError> {
    let results = persistence.search_artists(search_term, now).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The search could not be completed.")
    })?;
    Ok(SearchResponse {
        search_term: search_term.to_string(),
        results,
    })
}

/// Loads an artist page.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the artist does not exist.
pub fn show_artist(
    persistence: &mut Persistence,
    artist_id: ArtistId,
    now: OffsetDateTime,
) -> Result<ArtistDetail, ApiError> {
    persistence.get_artist_detail(artist_id, now).map_err(|e| {
        translate_persistence_error(e, "An error occurred. The artist could not be loaded.")
    })
}

// ============================================================================
// Shows
// ============================================================================

/// Validates and records a show.
///
/// A show naming a venue or artist that does not exist is reported as a
/// failed listing, the same as any other store rejection.
///
/// # Errors
///
/// Returns `ValidationFailed` if any field is invalid, or `OperationFailed`
/// if the store rejects the insert.
pub fn create_show(
    persistence: &mut Persistence,
    form: &ShowForm,
) -> Result<MutationResponse<ShowId>, ApiError> {
    let show: NewShow = validate_show(form).map_err(|errors| rejected("show", errors))?;

    let show_id: ShowId = persistence
        .create_show(&show)
        .map_err(|e: PersistenceError| {
            translate_persistence_error(e, "An error occurred. Show could not be listed.")
        })?;

    info!(show_id = show_id.value(), "Show listed");
    Ok(MutationResponse {
        id: show_id,
        message: String::from("Show was successfully listed!"),
    })
}

/// Lists every show.
///
/// # Errors
///
/// Returns `OperationFailed` if the store query fails.
pub fn list_shows(persistence: &mut Persistence) -> Result<Vec<ShowListing>, ApiError> {
    persistence.list_shows().map_err(|e| {
        translate_persistence_error(e, "An error occurred. Shows could not be loaded.")
    })
}
