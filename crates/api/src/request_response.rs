// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use fyyur_domain::{ArtistForm, ArtistId, VenueForm, VenueId};
use fyyur_persistence::{ArtistSummary, SearchResults, VenueGroup};
use serde::{Deserialize, Serialize};

/// API response for a successful create or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse<I> {
    /// The identifier of the created or edited entity.
    pub id: I,
    /// A success message.
    pub message: String,
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse<I> {
    /// The identifier of the removed entity.
    pub id: I,
    /// The number of shows removed with it.
    pub removed_shows: usize,
    /// A success message.
    pub message: String,
}

/// API response for the venues page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVenuesResponse {
    /// Venues grouped by (city, state).
    pub areas: Vec<VenueGroup>,
}

/// API response for the artists page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArtistsResponse {
    pub artists: Vec<ArtistSummary>,
}

/// API response for a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse<I> {
    /// The term as submitted.
    pub search_term: String,
    pub results: SearchResults<I>,
}

/// A stored venue rendered back into its edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFormResponse {
    pub venue_id: VenueId,
    pub form: VenueForm,
}

/// A stored artist rendered back into its edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFormResponse {
    pub artist_id: ArtistId,
    pub form: ArtistForm,
}
