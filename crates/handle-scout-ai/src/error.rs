//! Error type for username generation.

use thiserror::Error;

/// The only message a caller ever sees when generation fails.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to get suggestions from AI. Please check your API key and try again.";

/// Normalized failure of the remote generation call.
///
/// Authentication, network, quota and malformed-envelope failures all collapse
/// into this one error. The underlying cause is kept as the error `source`
/// for diagnostic logging only.
#[derive(Error, Debug)]
#[error("Failed to get suggestions from AI. Please check your API key and try again.")]
pub struct GenerationError {
    #[source]
    cause: Cause,
}

#[derive(Error, Debug)]
enum Cause {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API returned status {status} ({body_summary})")]
    Status { status: u16, body_summary: String },

    #[error("could not decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerationError {
    /// User-facing message, identical for every cause.
    pub fn message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }

    pub(crate) fn status(status: u16, body_summary: String) -> Self {
        Self {
            cause: Cause::Status {
                status,
                body_summary,
            },
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            cause: Cause::Http(err),
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            cause: Cause::Decode(err),
        }
    }
}
