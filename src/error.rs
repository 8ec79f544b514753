// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the gateway, the store and the form boundary.

use std::time::Duration;

/// Failure reported by an [`ActivityGateway`](crate::gateway::ActivityGateway).
///
/// The store never branches on the variant; it logs the error, resets the
/// lifecycle flag and hands the error back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Activities service unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Whether the remote side reported the requested activity as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound(_))
            || matches!(self, TransportError::Http { status: 404, .. })
    }
}

/// Error returned by every asynchronous [`ActivityStore`](crate::store::ActivityStore)
/// operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Activity {0} is not in the collection")]
    NotFound(String),

    #[error("Activity {0} already exists")]
    DuplicateId(String),

    #[error("Activity has no id")]
    MissingId,

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl StoreError {
    /// Whether this failure means the activity does not exist, locally or remotely.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound(_) => true,
            StoreError::Transport(err) => err.is_not_found(),
            _ => false,
        }
    }
}

/// Error produced while turning submitted form values into an activity.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid form values: {0}")]
    Invalid(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid time: {0:?}")]
    InvalidTime(String),

    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        FormError::Invalid(errors.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
