// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity field rules.
//!
//! Each entity form is described by a [`FormSchema`] value that the
//! validation routines receive explicitly.

use crate::forms::FormField;

/// Length limit shared by most text inputs.
pub const SHORT_TEXT_MAX: usize = 120;

/// Length limit for image links and artist descriptions.
pub const LONG_TEXT_MAX: usize = 500;

/// What a text input's content must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Free text.
    Text,
    /// One of the state codes.
    State,
    /// A phone number in international form.
    Phone,
    /// An absolute http(s) URL.
    Url,
}

/// The rule for one text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: FormField,
    /// Blank input is rejected when `true` and treated as absent otherwise.
    pub required: bool,
    /// Maximum length in characters.
    pub max_len: usize,
    pub format: FieldFormat,
}

impl FieldRule {
    const fn required(field: FormField, max_len: usize, format: FieldFormat) -> Self {
        Self {
            field,
            required: true,
            max_len,
            format,
        }
    }

    const fn optional(field: FormField, max_len: usize, format: FieldFormat) -> Self {
        Self {
            field,
            required: false,
            max_len,
            format,
        }
    }
}

/// The complete rule set for one entity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    /// Entity label used in messages ("Venue", "Artist").
    pub entity: &'static str,
    pub fields: &'static [FieldRule],
    /// At least one genre must be selected.
    pub genres_required: bool,
}

impl FormSchema {
    /// Returns the rule for `field`, if the schema has one.
    #[must_use]
    pub fn rule(&self, field: FormField) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.field == field)
    }
}

/// Rules for the venue form.
pub const VENUE_SCHEMA: FormSchema = FormSchema {
    entity: "Venue",
    fields: &[
        FieldRule::required(FormField::Name, SHORT_TEXT_MAX, FieldFormat::Text),
        FieldRule::required(FormField::City, SHORT_TEXT_MAX, FieldFormat::Text),
        FieldRule::required(FormField::State, SHORT_TEXT_MAX, FieldFormat::State),
        FieldRule::required(FormField::Address, SHORT_TEXT_MAX, FieldFormat::Text),
        FieldRule::optional(FormField::Phone, SHORT_TEXT_MAX, FieldFormat::Phone),
        FieldRule::required(FormField::Website, SHORT_TEXT_MAX, FieldFormat::Url),
        FieldRule::required(FormField::ImageLink, LONG_TEXT_MAX, FieldFormat::Url),
        FieldRule::optional(FormField::FacebookLink, SHORT_TEXT_MAX, FieldFormat::Url),
        FieldRule::optional(
            FormField::SeekingDescription,
            SHORT_TEXT_MAX,
            FieldFormat::Text,
        ),
    ],
    genres_required: true,
};

/// Rules for the artist form.
///
/// Artists have no address and allow a longer seeking description.
pub const ARTIST_SCHEMA: FormSchema = FormSchema {
    entity: "Artist",
    fields: &[
        FieldRule::required(FormField::Name, SHORT_TEXT_MAX, FieldFormat::Text),
        FieldRule::required(FormField::City, SHORT_TEXT_MAX, FieldFormat::Text),
        FieldRule::required(FormField::State, SHORT_TEXT_MAX, FieldFormat::State),
        FieldRule::optional(FormField::Phone, SHORT_TEXT_MAX, FieldFormat::Phone),
        FieldRule::required(FormField::Website, SHORT_TEXT_MAX, FieldFormat::Url),
        FieldRule::required(FormField::ImageLink, LONG_TEXT_MAX, FieldFormat::Url),
        FieldRule::optional(FormField::FacebookLink, SHORT_TEXT_MAX, FieldFormat::Url),
        FieldRule::optional(
            FormField::SeekingDescription,
            LONG_TEXT_MAX,
            FieldFormat::Text,
        ),
    ],
    genres_required: true,
};
