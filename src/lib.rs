// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent token detail aggregation for account-based chains.
//!
//! tokenview builds the data behind a fungible-token detail page: ERC-20
//! style metadata, the requesting holder's balance, a paginated transfer
//! history, and derived market figures (market cap, exchange rate), fetched
//! concurrently under a bounded in-flight cap and computed with exact decimal
//! arithmetic.
//!
//! The crate owns aggregation and financial derivation only. Token state and
//! price data arrive through the [`TokenDataSource`] and [`PriceOracle`]
//! traits; rendering, routing, and response encoding belong to the caller.
//!
//! # Entry points
//!
//! - [`TokenPageAggregator::aggregate`] produces the unified
//!   [`AggregatedTokenView`] for a token page request.
//! - [`TransferFeed::page`] serves one page of transfer history for a
//!   caller-supplied [`ContinuationToken`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokenview::{AddressKey, TokenKey, TokenPageAggregator, TokenViewConfig, TransferFeed};
//!
//! let aggregator = TokenPageAggregator::new(source.clone(), oracle, TokenViewConfig::default());
//! let feed = TransferFeed::new(source);
//!
//! let token = TokenKey::decode(path_token);
//! let address = AddressKey::decode_opt(query_address);
//!
//! let view = aggregator.aggregate(token.clone(), address.clone()).await?;
//! let next_page = feed.page(&token, &address, &view.transfers.continuation).await?;
//! ```

mod aggregator;
mod config;
mod errors;
mod keys;
mod market;
mod source;
mod task_group;
mod token_types;
mod transfers;

pub use aggregator::TokenPageAggregator;
pub use config::{
    TokenViewConfig, TokenViewConfigBuilder, DEFAULT_MAX_IN_FLIGHT_LOOKUPS, DEV_PLACEHOLDER_PRICE,
};
pub use errors::{AggregationError, SourceError, TokenViewError, TransfersError};
pub use keys::{AddressKey, DecodedKey, TokenKey};
pub use market::{format_thousands, normalized_supply, parse_price, MarketFigures};
pub use source::{FiatCode, PriceOracle, TokenDataSource};
pub use task_group::TaskGroup;
pub use token_types::{
    AggregatedTokenView, Balance, ContinuationToken, Erc20Metadata, TransferPage, TransferRecord,
};
pub use transfers::TransferFeed;
