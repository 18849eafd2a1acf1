// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Collaborator traits for token data and price feeds
//!
//! This layer never talks to storage or the network itself. Everything it
//! needs arrives through two narrow seams: a [`TokenDataSource`] for token
//! state and a [`PriceOracle`] for the native currency's fiat rate. Both are
//! object safe, so implementations can be swapped at runtime and mocked in
//! tests.
//!
//! # Example: an in-memory data source
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use tokenview::{
//!     AddressKey, Balance, ContinuationToken, Erc20Metadata, SourceError, TokenDataSource,
//!     TokenKey, TransferPage,
//! };
//!
//! struct FixtureSource {
//!     metadata: Erc20Metadata,
//! }
//!
//! #[async_trait]
//! impl TokenDataSource for FixtureSource {
//!     async fn token_transfers(
//!         &self,
//!         _token: &TokenKey,
//!         _address: &AddressKey,
//!         _continuation: &ContinuationToken,
//!     ) -> Result<TransferPage, SourceError> {
//!         Ok(TransferPage::default())
//!     }
//!
//!     async fn token_metadata(&self, _token: &TokenKey) -> Result<Erc20Metadata, SourceError> {
//!         Ok(self.metadata.clone())
//!     }
//!
//!     async fn balance(
//!         &self,
//!         _address: &AddressKey,
//!         _token: &TokenKey,
//!     ) -> Result<Balance, SourceError> {
//!         Err(SourceError::not_found("balance"))
//!     }
//! }
//! ```

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::SourceError;
use crate::keys::{AddressKey, TokenKey};
use crate::token_types::{Balance, ContinuationToken, Erc20Metadata, TransferPage};

/// ISO-4217 style fiat currency code.
///
/// # Examples
///
/// ```
/// use tokenview::FiatCode;
///
/// assert_eq!(FiatCode::usd().as_str(), "USD");
/// assert_eq!(FiatCode::new("eur").as_str(), "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiatCode(String);

impl FiatCode {
    /// Create a fiat code; normalized to upper case.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// The raw currency code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FiatCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl std::fmt::Display for FiatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to token state.
///
/// The three lookups are mutually independent reads; the aggregation layer
/// issues them concurrently. Any failed lookup fails the aggregation as a
/// whole, so implementations should only return `Err` for conditions that
/// genuinely prevent serving data (backend outage, timeout), not for empty
/// result sets.
#[async_trait]
pub trait TokenDataSource: Send + Sync {
    /// Fetch one page of transfer history for a token.
    ///
    /// `address` may be empty to mean "all holders"; an empty `continuation`
    /// selects the first page.
    async fn token_transfers(
        &self,
        token: &TokenKey,
        address: &AddressKey,
        continuation: &ContinuationToken,
    ) -> Result<TransferPage, SourceError>;

    /// Fetch ERC-20 style metadata for a token contract.
    async fn token_metadata(&self, token: &TokenKey) -> Result<Erc20Metadata, SourceError>;

    /// Fetch a holder's balance of a token.
    async fn balance(&self, address: &AddressKey, token: &TokenKey)
        -> Result<Balance, SourceError>;
}

/// Current exchange rate of the chain's native currency.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Native-currency price in the given fiat currency.
    ///
    /// Returns zero when no rate is available; unavailability is not an
    /// error, the derived exchange rate simply degrades to zero.
    async fn current_fiat_rate(&self, fiat: &FiatCode) -> BigDecimal;
}
