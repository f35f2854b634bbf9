// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fyyur_api::ApiError;

/// Errors that end a CLI invocation.
///
/// `Display` is what the user sees on stderr.
#[derive(Debug)]
pub enum CliError {
    /// The handler refused or failed the request.
    Api(ApiError),
    /// The submitted form could not be read or decoded.
    InvalidInput(String),
    /// The result could not be written.
    Output(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::InvalidInput(msg) => write!(f, "Could not read form: {msg}"),
            Self::Output(msg) => write!(f, "Could not write output: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
