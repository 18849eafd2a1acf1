// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for the token page aggregation surface.

/// Errors the aggregation surface can fail with.
///
/// Deliberately opaque: the caller learns that the view is unavailable, not
/// which of the concurrent lookups failed. The failing lookup is recorded in
/// a `tracing` error event where it is useful for diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// One of the concurrent data-source lookups failed; no partial view is
    /// produced.
    #[error("token data temporarily unavailable")]
    SourceUnavailable,
}
