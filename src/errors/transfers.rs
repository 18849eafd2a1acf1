// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for the paginated transfers surface.

/// Errors the transfers surface can fail with.
///
/// A failed history lookup is an explicit error here, never a silently empty
/// page; callers can rely on an `Ok` page being exactly what the data source
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum TransfersError {
    /// The transfer-history lookup failed.
    #[error("transfer history temporarily unavailable")]
    SourceUnavailable,

    /// The fetched page could not be serialized as structured data.
    #[error("transfer page serialization failed: {details}")]
    Serialization {
        /// Details about the serialization failure
        details: String,
    },
}
