// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent token page aggregation
//!
//! One aggregation request fans out to up to three independent data-source
//! lookups (first transfer page, metadata, holder balance), joins them
//! all-or-fail-fast under the configured in-flight cap, then derives the
//! market figures and assembles the immutable view.
//!
//! Failure policy: if any launched lookup fails, the whole request fails with
//! an opaque [`AggregationError::SourceUnavailable`]. No partial view is ever
//! returned. Which lookup failed is recorded in the error event emitted by
//! the failing task.

use std::sync::Arc;

use alloy_primitives::Bytes;
use tracing::{debug, error, info};

use crate::config::TokenViewConfig;
use crate::errors::{AggregationError, SourceError};
use crate::keys::{AddressKey, TokenKey};
use crate::market::{format_thousands, MarketFigures};
use crate::source::{PriceOracle, TokenDataSource};
use crate::task_group::TaskGroup;
use crate::token_types::{
    AggregatedTokenView, Balance, ContinuationToken, Erc20Metadata, TransferPage,
};

/// Output slot of a single lookup task.
///
/// Each task produces exactly one variant, so assembling the view after the
/// join needs no locking, just a fold into typed slots.
enum FetchSlot {
    Transfers(TransferPage),
    Metadata(Erc20Metadata),
    Balance(Balance),
}

/// Aggregates token detail pages from a data source and a price oracle.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use tokenview::{AddressKey, TokenKey, TokenPageAggregator, TokenViewConfig};
///
/// let aggregator = TokenPageAggregator::new(source, oracle, TokenViewConfig::default());
///
/// let token = TokenKey::decode("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// let address = AddressKey::decode_opt(query.get("a"));
/// let view = aggregator.aggregate(token, address).await?;
/// ```
pub struct TokenPageAggregator {
    source: Arc<dyn TokenDataSource>,
    oracle: Arc<dyn PriceOracle>,
    config: TokenViewConfig,
}

impl TokenPageAggregator {
    /// Create an aggregator over the given collaborators.
    pub fn new(
        source: Arc<dyn TokenDataSource>,
        oracle: Arc<dyn PriceOracle>,
        config: TokenViewConfig,
    ) -> Self {
        Self {
            source,
            oracle,
            config,
        }
    }

    /// Create an aggregator with the default configuration.
    pub fn with_defaults(source: Arc<dyn TokenDataSource>, oracle: Arc<dyn PriceOracle>) -> Self {
        Self::new(source, oracle, TokenViewConfig::default())
    }

    /// Build the aggregated view for one token page request.
    ///
    /// The balance lookup is launched only when `address` is non-empty; an
    /// absent holder is a complete view with `balance: None`, not an error.
    pub async fn aggregate(
        &self,
        token: TokenKey,
        address: AddressKey,
    ) -> Result<AggregatedTokenView, AggregationError> {
        let mut group: TaskGroup<FetchSlot, SourceError> =
            TaskGroup::with_limit(self.config.max_in_flight_lookups);

        let source = Arc::clone(&self.source);
        let (fetch_token, fetch_address) = (token.clone(), address.clone());
        group.spawn(async move {
            source
                .token_transfers(&fetch_token, &fetch_address, &ContinuationToken::first_page())
                .await
                .map(FetchSlot::Transfers)
                .map_err(|e| {
                    error!(lookup = "transfers", token = %fetch_token, error = %e, "Token page lookup failed");
                    e
                })
        });

        let source = Arc::clone(&self.source);
        let fetch_token = token.clone();
        group.spawn(async move {
            source
                .token_metadata(&fetch_token)
                .await
                .map(FetchSlot::Metadata)
                .map_err(|e| {
                    error!(lookup = "metadata", token = %fetch_token, error = %e, "Token page lookup failed");
                    e
                })
        });

        if !address.is_empty() {
            let source = Arc::clone(&self.source);
            let (fetch_token, fetch_address) = (token.clone(), address.clone());
            group.spawn(async move {
                source
                    .balance(&fetch_address, &fetch_token)
                    .await
                    .map(FetchSlot::Balance)
                    .map_err(|e| {
                        error!(lookup = "balance", token = %fetch_token, address = %fetch_address, error = %e, "Token page lookup failed");
                        e
                    })
            });
        }

        let slots = group.join_all().await.map_err(|e| {
            error!(token = %token, error = %e, "Aborting token page aggregation");
            AggregationError::SourceUnavailable
        })?;

        let mut transfers = None;
        let mut metadata = None;
        let mut balance = None;
        for slot in slots {
            match slot {
                FetchSlot::Transfers(page) => transfers = Some(page),
                FetchSlot::Metadata(fetched) => metadata = Some(fetched),
                FetchSlot::Balance(fetched) => balance = Some(fetched),
            }
        }
        let (Some(transfers), Some(mut metadata)) = (transfers, metadata) else {
            error!(token = %token, "Lookup set joined without filling every required slot");
            return Err(AggregationError::SourceUnavailable);
        };

        if !metadata.has_price() {
            if let Some(placeholder) = &self.config.placeholder_price {
                debug!(token = %token, placeholder = %placeholder, "Empty metadata price, substituting configured placeholder");
                metadata.price = Bytes::from(placeholder.clone().into_bytes());
            }
        }

        let fiat_rate = self.oracle.current_fiat_rate(&self.config.fiat).await;
        let figures = MarketFigures::compute(&metadata, &fiat_rate);

        info!(
            token = %token,
            transfers = transfers.len(),
            has_balance = balance.is_some(),
            market_cap = %figures.market_cap,
            "Assembled token view"
        );

        Ok(AggregatedTokenView {
            token,
            address,
            transfers,
            metadata,
            balance,
            market_cap: format_thousands(&figures.market_cap),
            diluted_market_cap: format_thousands(&figures.diluted_market_cap),
            token_price: figures.token_price,
            exchange_rate: figures.exchange_rate,
        })
    }
}
