//! Shared error types for the services crate.

use thiserror::Error;

use catalog_core::FormError;
use storage::repository::StorageError;

/// Why a submit never reached the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the record is still loading")]
    Loading,
    #[error(transparent)]
    Invalid(#[from] FormError),
}

/// User-facing text for a failed request.
///
/// Prefers the server's own message, then the transport description, then
/// the caller's fixed fallback.
#[must_use]
pub fn failure_message(err: &StorageError, fallback: &str) -> String {
    err.server_message()
        .map(str::to_owned)
        .or_else(|| err.transport_message())
        .unwrap_or_else(|| fallback.to_owned())
}
