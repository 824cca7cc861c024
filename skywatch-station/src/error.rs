//! Error taxonomy for the station runtime
//!
//! Three failure families, each with a different recovery story:
//!
//! - [`AddressError`]: a malformed configured address. Rejected before any
//!   state changes; nothing to recover.
//! - [`FetchError`]: a poll that failed. Recovered locally by flipping the
//!   session offline and notifying the user; the next poll tick retries.
//! - [`SettingsError`]: the settings file could not be read or written.
//!
//! Classification gaps do not exist as an error: the decision table in
//! `skywatch-core` is total, so every accepted reading classifies. No error
//! on any path stops the scheduler.

use thiserror::Error;

/// The configured device address does not parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid device address: {0:?}")]
pub struct AddressError(pub String);

/// A single poll failed.
///
/// The `Display` text doubles as the user-visible notification body, so
/// distinct failures produce distinct messages and identical failures
/// deduplicate.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or request error before any response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// Device answered with a non-2xx status
    #[error("Device returned HTTP {status}")]
    Status {
        status: u16,
    },

    /// Response body missing a field, or a field not interpretable as a
    /// number. Never silently defaulted.
    #[error("Malformed device payload: {0}")]
    Payload(String),
}

/// Settings persistence error.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}
