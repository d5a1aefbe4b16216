//! Shared error types for the services crate.

use thiserror::Error;

use tracker_core::model::WeekDateError;

/// Errors emitted by `WeekDataService`.
///
/// Every variant's `Display` output is suitable for the error banner. The
/// date errors carry their fixed messages; `Server` relays the backend's own
/// text verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WeekDataError {
    #[error(transparent)]
    Date(#[from] WeekDateError),
    #[error("{0}")]
    Server(String),
    #[error("HTTP error! Status: {}", .0.as_u16())]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
