//! Domain error types

use thiserror::Error;

/// Failure while fetching a page from the API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Rejected submission of the "select first N" form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Please enter a number")]
    Empty,

    #[error("Please enter a number ({0:?} is not a row count)")]
    NotANumber(String),
}
