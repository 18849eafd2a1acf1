// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tokenview library.
//!
//! This module provides strongly-typed errors for all public APIs. It follows
//! a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`SourceError`], [`AggregationError`], [`TransfersError`])
//! - **Unified error type** ([`TokenViewError`]) for convenience when the
//!   error source does not need to be distinguished
//!
//! Two condition classes are intentionally NOT errors anywhere in the crate:
//! malformed hex input (resolves to an empty key, see
//! [`DecodedKey`](crate::DecodedKey)) and bad or missing price data (absorbed
//! into zero values by the market math with a diagnostic event).
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use tokenview::{AggregationError, TokenPageAggregator};
//!
//! match aggregator.aggregate(token, address).await {
//!     Ok(view) => render(view),
//!     Err(AggregationError::SourceUnavailable) => respond_service_unavailable(),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use tokenview::TokenViewError;
//!
//! async fn handle() -> Result<(), TokenViewError> {
//!     let view = aggregator.aggregate(token, address).await?;
//!     let page = feed.page(&token, &address, &cursor).await?;
//!     // Errors automatically convert to TokenViewError via From implementations
//!     Ok(())
//! }
//! ```

mod aggregation;
mod source;
mod transfers;

pub use aggregation::AggregationError;
pub use source::SourceError;
pub use transfers::TransfersError;

/// Unified error type for all tokenview operations.
///
/// Wraps the module-specific error types; each converts automatically via
/// `From`, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum TokenViewError {
    /// Error from a data source collaborator.
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    /// Error from the token page aggregation surface.
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// Error from the paginated transfers surface.
    #[error("Transfers error: {0}")]
    Transfers(#[from] TransfersError),
}
