// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Data model for token detail aggregation
//!
//! These types carry token state between the data source, the market math,
//! and the assembled view. On-chain integers (decimals, total supply) stay in
//! their raw big-endian byte encoding until the arithmetic layer decodes them
//! into arbitrary-precision values, so nothing is lost to intermediate
//! fixed-width conversions.
//!
//! # Type Relationships
//!
//! ```text
//! Erc20Metadata (byte-encoded, from the data source)
//!     |
//!     | decode + MarketFigures::compute
//!     ↓
//! MarketFigures (exact BigDecimal)
//!     |
//!     | assemble with TransferPage and Balance
//!     ↓
//! AggregatedTokenView (immutable, per-request)
//! ```

use alloy_primitives::{Address, Bytes, B256, U256};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::keys::{AddressKey, TokenKey};

/// ERC-20 style token metadata as returned by the data source.
///
/// `decimals` and `total_supply` are big-endian big-integer byte encodings;
/// `price` is a UTF-8 decimal string and may be empty when no price feed
/// covers the token. The struct is fetched fresh per request and never cached
/// by this layer.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Bytes;
/// use tokenview::Erc20Metadata;
///
/// let metadata = Erc20Metadata {
///     name: "USD Coin".to_string(),
///     symbol: "USDC".to_string(),
///     decimals: Bytes::from(vec![6]),
///     total_supply: Bytes::from(1_000_000u64.to_be_bytes().to_vec()),
///     price: Bytes::from("1.00".as_bytes().to_vec()),
/// };
/// assert_eq!(metadata.decimals_int().to_string(), "6");
/// assert_eq!(metadata.price_str(), "1.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Metadata {
    /// Token name; may be empty for contracts without metadata extensions.
    pub name: String,
    /// Token symbol; may be empty.
    pub symbol: String,
    /// Big-endian byte encoding of the decimals exponent.
    pub decimals: Bytes,
    /// Big-endian byte encoding of the total supply in smallest units.
    pub total_supply: Bytes,
    /// UTF-8 decimal string with the fiat price per whole token; may be empty.
    pub price: Bytes,
}

impl Erc20Metadata {
    /// Decimals exponent as an arbitrary-precision integer.
    ///
    /// Empty bytes decode to zero.
    pub fn decimals_int(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.decimals)
    }

    /// Total supply in smallest units as an arbitrary-precision integer.
    ///
    /// Empty bytes decode to zero.
    pub fn total_supply_int(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.total_supply)
    }

    /// Price field as a string slice; non-UTF-8 bytes behave like an empty
    /// price.
    pub fn price_str(&self) -> &str {
        std::str::from_utf8(&self.price).unwrap_or("")
    }

    /// Whether a non-empty price string is present.
    pub fn has_price(&self) -> bool {
        !self.price.is_empty()
    }
}

/// A holder's raw quantity of a token, in smallest units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(U256);

impl Balance {
    /// Zero balance
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a balance from a raw smallest-unit amount.
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether the balance is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<U256> for Balance {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque cursor selecting a page of transfer history.
///
/// An empty token means "first page" when supplied by a caller and "no more
/// pages" when returned inside a [`TransferPage`]. The contents are produced
/// and consumed by the data source; this layer never inspects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// The cursor selecting the first page.
    pub const fn first_page() -> Self {
        Self(String::new())
    }

    /// Wrap an opaque cursor string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Whether this is the first-page / no-more-pages cursor.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw cursor string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContinuationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single token transfer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Transaction the transfer was emitted in.
    pub tx_hash: B256,
    /// Sending account.
    pub from: Address,
    /// Receiving account.
    pub to: Address,
    /// Raw transferred amount in smallest units.
    pub amount: U256,
    /// Block the transfer was included in.
    pub block_number: u64,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
}

/// One page of transfer history plus the cursor for the next page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPage {
    /// Transfers in this page, ordered by the data source.
    pub transfers: Vec<TransferRecord>,
    /// Cursor for the following page; empty when this is the last page.
    pub continuation: ContinuationToken,
}

impl TransferPage {
    /// Number of transfers in this page.
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Whether the page holds no transfers.
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Whether another page can be requested after this one.
    pub fn has_more(&self) -> bool {
        !self.continuation.is_empty()
    }
}

/// The unified per-request output of token page aggregation.
///
/// Assembled once after every launched lookup has completed; immutable
/// afterwards and never persisted. `diluted_market_cap` currently mirrors
/// `market_cap` since no circulating-vs-diluted supply distinction is
/// computed yet; the field is kept separate so a future split does not change
/// the shape of the view.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedTokenView {
    /// Token contract key the view was built for.
    pub token: TokenKey,
    /// Holder key the view was built for; may be absent.
    pub address: AddressKey,
    /// First page of the token's transfer history.
    pub transfers: TransferPage,
    /// Token metadata as fetched, with the placeholder price already applied
    /// when the source returned an empty price field.
    pub metadata: Erc20Metadata,
    /// Holder balance; present only when a holder key was supplied.
    pub balance: Option<Balance>,
    /// Effective fiat price per whole token used for the derived figures.
    pub token_price: BigDecimal,
    /// Market cap rendered with two fractional digits and thousands
    /// separators.
    pub market_cap: String,
    /// Currently identical to `market_cap`.
    pub diluted_market_cap: String,
    /// Token price expressed in the chain's native currency; zero when the
    /// native-currency fiat rate is unavailable.
    pub exchange_rate: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_with(decimals: Vec<u8>, supply: Vec<u8>, price: &str) -> Erc20Metadata {
        Erc20Metadata {
            name: String::new(),
            symbol: String::new(),
            decimals: Bytes::from(decimals),
            total_supply: Bytes::from(supply),
            price: Bytes::from(price.as_bytes().to_vec()),
        }
    }

    #[test]
    fn test_metadata_decodes_big_endian_integers() {
        let metadata = metadata_with(
            vec![18],
            vec![0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00],
            "2.50",
        );
        assert_eq!(metadata.decimals_int().to_string(), "18");
        assert_eq!(metadata.total_supply_int().to_string(), "1000000000000000000");
    }

    #[test]
    fn test_metadata_empty_bytes_decode_to_zero() {
        let metadata = metadata_with(vec![], vec![], "");
        assert_eq!(metadata.decimals_int().to_string(), "0");
        assert_eq!(metadata.total_supply_int().to_string(), "0");
        assert!(!metadata.has_price());
    }

    #[test]
    fn test_metadata_non_utf8_price_reads_as_empty() {
        let mut metadata = metadata_with(vec![6], vec![1], "1.00");
        metadata.price = Bytes::from(vec![0xff, 0xfe]);
        assert_eq!(metadata.price_str(), "");
    }

    #[test]
    fn test_continuation_token_first_page_is_empty() {
        assert!(ContinuationToken::first_page().is_empty());
        assert!(!ContinuationToken::new("page-2").is_empty());
    }

    #[test]
    fn test_transfer_page_has_more() {
        let mut page = TransferPage::default();
        assert!(!page.has_more());
        assert!(page.is_empty());

        page.continuation = ContinuationToken::new("next");
        assert!(page.has_more());
    }

    #[test]
    fn test_balance_zero() {
        assert!(Balance::ZERO.is_zero());
        assert!(!Balance::new(U256::from(5u64)).is_zero());
    }
}
