//! Access control error types

use std::time::Duration;
use thiserror::Error;

/// Errors returned by the access controller.
///
/// `InvalidDuration` is the only domain error: it is caller-driven, expected
/// in normal operation, and never logged as an anomaly. Everything else the
/// controller does is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The requested unlock window is zero or exceeds the configured ceiling
    #[error(
        "invalid unlock duration: requested {}s, must be greater than 0 and at most {}s",
        .requested.as_secs(),
        .max.as_secs()
    )]
    InvalidDuration {
        /// Duration the caller asked for
        requested: Duration,
        /// Configured ceiling on a single unlock window
        max: Duration,
    },
}
