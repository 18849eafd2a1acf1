// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Paginated transfer history surface
//!
//! The secondary entry point next to full page aggregation: a single
//! transfer-history lookup driven by a caller-supplied continuation token,
//! returned as structured data. A failed lookup is an explicit error here,
//! never a silently empty page.

use std::sync::Arc;

use tracing::error;

use crate::errors::TransfersError;
use crate::keys::{AddressKey, TokenKey};
use crate::source::TokenDataSource;
use crate::token_types::{ContinuationToken, TransferPage};

/// Serves pages of a token's transfer history.
pub struct TransferFeed {
    source: Arc<dyn TokenDataSource>,
}

impl TransferFeed {
    /// Create a feed over the given data source.
    pub fn new(source: Arc<dyn TokenDataSource>) -> Self {
        Self { source }
    }

    /// Fetch one page of transfer history.
    ///
    /// `address` may be empty to cover all holders; an empty `continuation`
    /// selects the first page. Feeding a returned page's continuation token
    /// back in yields the next disjoint page.
    pub async fn page(
        &self,
        token: &TokenKey,
        address: &AddressKey,
        continuation: &ContinuationToken,
    ) -> Result<TransferPage, TransfersError> {
        self.source
            .token_transfers(token, address, continuation)
            .await
            .map_err(|e| {
                error!(token = %token, continuation = %continuation, error = %e, "Transfer history lookup failed");
                TransfersError::SourceUnavailable
            })
    }

    /// Fetch one page and serialize it as a JSON string.
    ///
    /// Convenience for callers whose response layer wants the wire form
    /// directly rather than the typed page.
    pub async fn page_json(
        &self,
        token: &TokenKey,
        address: &AddressKey,
        continuation: &ContinuationToken,
    ) -> Result<String, TransfersError> {
        let page = self.page(token, address, continuation).await?;
        serde_json::to_string(&page).map_err(|e| {
            error!(token = %token, error = %e, "Failed to serialize transfer page");
            TransfersError::Serialization {
                details: e.to_string(),
            }
        })
    }
}
