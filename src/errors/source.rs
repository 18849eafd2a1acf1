// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error type returned by data source collaborators.

/// Errors a [`TokenDataSource`](crate::TokenDataSource) lookup can fail with.
///
/// Every variant is fatal to the aggregation request that issued the lookup;
/// the distinction between variants exists for logs, not for callers, who
/// only ever see a generic unavailable signal.
///
/// # Examples
///
/// ```
/// use tokenview::SourceError;
///
/// let err = SourceError::backend("bigtable: connection refused");
/// assert_eq!(err.to_string(), "Backend failure: bigtable: connection refused");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing store or network failed.
    #[error("Backend failure: {details}")]
    Backend {
        /// Details about the backend failure
        details: String,
    },

    /// The lookup did not complete in time.
    #[error("Lookup timed out: {details}")]
    Timeout {
        /// What timed out
        details: String,
    },

    /// An entity the lookup requires does not exist.
    ///
    /// Only for cases where absence genuinely prevents serving data; an
    /// empty result set is a successful lookup, not a `NotFound`.
    #[error("Not found: {entity}")]
    NotFound {
        /// Name/description of the missing entity
        entity: String,
    },
}

impl SourceError {
    /// Create a `Backend` error with details.
    pub fn backend(details: impl Into<String>) -> Self {
        SourceError::Backend {
            details: details.into(),
        }
    }

    /// Create a `Timeout` error with details.
    pub fn timeout(details: impl Into<String>) -> Self {
        SourceError::Timeout {
            details: details.into(),
        }
    }

    /// Create a `NotFound` error for a specific entity.
    pub fn not_found(entity: impl Into<String>) -> Self {
        SourceError::NotFound {
            entity: entity.into(),
        }
    }
}

impl From<tokio::task::JoinError> for SourceError {
    fn from(e: tokio::task::JoinError) -> Self {
        SourceError::backend(format!("lookup task failed to join: {e}"))
    }
}
