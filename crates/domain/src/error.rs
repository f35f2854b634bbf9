// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::forms::FormField;

/// Errors raised when a single domain value cannot be constructed.
///
/// These are produced by the `FromStr` implementations of the closed
/// enumerations and by timestamp parsing. Form validation reports
/// problems through [`FieldErrors`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The value is not one of the known genres.
    InvalidGenre(String),
    /// The value is not one of the known state codes.
    InvalidState(String),
    /// An identifier is not a positive integer.
    InvalidId(String),
    /// A timestamp could not be parsed.
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// The parser's explanation.
        error: String,
    },
    /// A timestamp could not be rendered in storage format.
    TimestampFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGenre(genre) => write!(f, "'{genre}' is not a known genre"),
            Self::InvalidState(state) => write!(f, "'{state}' is not a known state code"),
            Self::InvalidId(value) => write!(f, "'{value}' is not a valid identifier"),
            Self::InvalidTimestamp { value, error } => {
                write!(f, "Failed to parse timestamp '{value}': {error}")
            }
            Self::TimestampFormat(msg) => write!(f, "Failed to format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

/// A single rule failure on one form field.
///
/// The messages are the ones shown next to the offending input when a
/// submission is redisplayed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldViolation {
    /// A required field is blank.
    #[error("This field is required.")]
    Required,

    /// The value exceeds the field's length limit.
    #[error("Field cannot be longer than {max} characters.")]
    TooLong { max: usize },

    /// The value is not an absolute http(s) URL with a host.
    #[error("Invalid URL.")]
    InvalidUrl,

    /// The value does not parse as a valid phone number.
    #[error("Invalid phone number")]
    InvalidPhone,

    /// The value is not one of the state codes.
    #[error("'{0}' is not a valid choice.")]
    InvalidState(String),

    /// The value is not one of the genres.
    #[error("{0} is not a valid genre. Please select one or more of the options above")]
    InvalidGenre(String),

    /// The value is not a positive integer identifier.
    #[error("Not a valid integer value.")]
    InvalidId,

    /// The value is not a recognised date and time.
    #[error("Not a valid datetime value.")]
    InvalidDateTime,
}

/// Per-field validation failures for one submission.
///
/// Every failing field is recorded, not just the first. Fields iterate in
/// form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, Vec<FieldViolation>>,
}

impl FieldErrors {
    /// Creates an empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation against a field.
    pub fn add(&mut self, field: FormField, violation: FieldViolation) {
        self.errors.entry(field).or_default().push(violation);
    }

    /// Moves every violation from `other` into this collection.
    pub fn merge(&mut self, other: Self) {
        for (field, violations) in other.errors {
            self.errors.entry(field).or_default().extend(violations);
        }
    }

    /// Returns `true` when no field has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with at least one violation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the violations recorded for `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> &[FieldViolation] {
        self.errors.get(&field).map_or(&[][..], Vec::as_slice)
    }

    /// Returns `true` if `field` has at least one violation.
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates over failing fields and their violations in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &[FieldViolation])> {
        self.errors
            .iter()
            .map(|(field, violations)| (*field, violations.as_slice()))
    }

    /// Converts the collection into `Ok(value)` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field has failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for (field, violations) in self.iter() {
            for violation in violations {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {violation}", field.as_str())?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, violations) in &self.errors {
            let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
            map.serialize_entry(field.as_str(), &messages)?;
        }
        map.end()
    }
}
