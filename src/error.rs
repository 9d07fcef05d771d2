//! Error taxonomy for the correlation pipelines.
//!
//! Every failure a pipeline can produce is one of the variants below; the
//! request boundary converts whichever variant surfaces into a uniform
//! [`ErrorEnvelope`] so callers never see partial results dressed up as
//! complete ones.

use log::error;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A request parameter was missing or not a valid integer. Raised before
    /// any store query is issued.
    #[error("invalid or missing parameter '{name}'")]
    InvalidParameter { name: &'static str },

    /// The store returned fewer timeline samples than the requested window
    /// count; the terminal window cannot be synthesized.
    #[error("expected {expected} timeline samples, store returned {actual}")]
    InsufficientSamples { expected: usize, actual: usize },

    /// The post's relation record cannot bound a visibility interval, either
    /// because `last` is missing or because no presence evidence exists.
    #[error("post {post_id} has no bounded visibility interval")]
    IncompleteRelation { post_id: i64 },

    /// A store gateway call failed. Not retried here; retry policy belongs to
    /// the gateway.
    #[error("store query failed: {0}")]
    StoreUnavailable(String),
}

impl Error {
    /// Client errors keep their message in the envelope; everything else is
    /// collapsed to a generic message with the detail left to the server log.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidParameter { .. })
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let error = if self.is_client_error() {
            self.to_string()
        } else {
            // Full detail stays in the server log only.
            error!("request failed: {self}");
            "request failed".to_string()
        };
        ErrorEnvelope { error }
    }
}

/// Uniform error shape returned to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error: String,
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}
