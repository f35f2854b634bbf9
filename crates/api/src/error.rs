// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fyyur_domain::FieldErrors;
use fyyur_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
///
/// `Display` renders the flash message shown to the user. Store internals
/// never appear in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A submitted form failed validation. Nothing was written.
    ValidationFailed {
        /// The kind of entity the form describes.
        entity: String,
        /// Every failing field with its messages.
        errors: FieldErrors,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store rejected or failed the operation. It was rolled back.
    OperationFailed {
        /// The flash message for the failed operation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { entity, errors } => {
                write!(f, "The {entity} form has errors: {errors}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::OperationFailed { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the per-field messages for a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found errors keep their identity. Every other store failure is
/// logged and replaced by `failure_message`.
///
/// # Arguments
///
/// * `err` - The persistence error
/// * `failure_message` - The flash message to show if the operation failed
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, failure_message: &str) -> ApiError {
    match err {
        PersistenceError::VenueNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Venue"),
            message: format!("Venue {id} does not exist"),
        },
        PersistenceError::ArtistNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Artist"),
            message: format!("Artist {id} does not exist"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => {
            error!(error = %other, "{failure_message}");
            ApiError::OperationFailed {
                message: failure_message.to_string(),
            }
        }
    }
}
