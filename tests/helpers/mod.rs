// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tokenview integration tests
//!
//! Provides mock implementations of the collaborator traits so aggregation
//! and pagination logic can be tested without a real backend.

use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::DateTime;
use num_bigint::BigInt;
use tokenview::{
    AddressKey, Balance, ContinuationToken, Erc20Metadata, FiatCode, PriceOracle, SourceError,
    TokenDataSource, TokenKey, TransferPage, TransferRecord,
};

/// Mock TokenDataSource with configurable results and invocation counters.
///
/// Pagination is served from a fixed in-memory transfer set; continuation
/// tokens encode the next start index, so consecutive pages are disjoint and
/// gap free by construction.
///
/// # Example
///
/// ```rust,ignore
/// let source = Arc::new(
///     MockTokenDataSource::new()
///         .with_transfers(transfer_fixture(10), 3)
///         .with_metadata(metadata(6, 1_000_000_000, "0.01")),
/// );
/// assert_eq!(source.balance_calls(), 0);
/// ```
pub struct MockTokenDataSource {
    transfers: Vec<TransferRecord>,
    page_size: usize,
    metadata: Erc20Metadata,
    balance: Balance,
    fail_transfers: bool,
    fail_metadata: bool,
    fail_balance: bool,
    transfer_calls: AtomicUsize,
    metadata_calls: AtomicUsize,
    balance_calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockTokenDataSource {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            page_size: 25,
            metadata: Erc20Metadata::default(),
            balance: Balance::ZERO,
            fail_transfers: false,
            fail_metadata: false,
            fail_balance: false,
            transfer_calls: AtomicUsize::new(0),
            metadata_calls: AtomicUsize::new(0),
            balance_calls: AtomicUsize::new(0),
        }
    }

    /// Set the underlying transfer set and the page size used to serve it.
    pub fn with_transfers(mut self, transfers: Vec<TransferRecord>, page_size: usize) -> Self {
        self.transfers = transfers;
        self.page_size = page_size.max(1);
        self
    }

    /// Set the metadata returned for every token.
    pub fn with_metadata(mut self, metadata: Erc20Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the balance returned for every holder.
    pub fn with_balance(mut self, balance: Balance) -> Self {
        self.balance = balance;
        self
    }

    /// Make the transfers lookup fail.
    pub fn failing_transfers(mut self) -> Self {
        self.fail_transfers = true;
        self
    }

    /// Make the metadata lookup fail.
    pub fn failing_metadata(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    /// Make the balance lookup fail.
    pub fn failing_balance(mut self) -> Self {
        self.fail_balance = true;
        self
    }

    pub fn transfer_calls(&self) -> usize {
        self.transfer_calls.load(Ordering::SeqCst)
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenDataSource for MockTokenDataSource {
    async fn token_transfers(
        &self,
        _token: &TokenKey,
        _address: &AddressKey,
        continuation: &ContinuationToken,
    ) -> Result<TransferPage, SourceError> {
        self.transfer_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_transfers {
            return Err(SourceError::backend("transfers lookup configured to fail"));
        }

        let start = continuation.as_str().parse::<usize>().unwrap_or(0);
        let end = (start + self.page_size).min(self.transfers.len());
        let continuation = if end < self.transfers.len() {
            ContinuationToken::new(end.to_string())
        } else {
            ContinuationToken::first_page()
        };

        Ok(TransferPage {
            transfers: self.transfers.get(start..end).unwrap_or(&[]).to_vec(),
            continuation,
        })
    }

    async fn token_metadata(&self, _token: &TokenKey) -> Result<Erc20Metadata, SourceError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_metadata {
            return Err(SourceError::backend("metadata lookup configured to fail"));
        }
        Ok(self.metadata.clone())
    }

    async fn balance(
        &self,
        _address: &AddressKey,
        _token: &TokenKey,
    ) -> Result<Balance, SourceError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance {
            return Err(SourceError::backend("balance lookup configured to fail"));
        }
        Ok(self.balance)
    }
}

/// Mock PriceOracle returning a fixed native-currency fiat rate.
pub struct MockPriceOracle {
    rate: BigDecimal,
}

#[allow(dead_code)]
impl MockPriceOracle {
    pub fn with_rate(rate: BigDecimal) -> Self {
        Self { rate }
    }

    pub fn unavailable() -> Self {
        Self {
            rate: BigDecimal::from(0),
        }
    }
}

#[async_trait]
impl PriceOracle for MockPriceOracle {
    async fn current_fiat_rate(&self, _fiat: &FiatCode) -> BigDecimal {
        self.rate.clone()
    }
}

/// Install a compact tracing subscriber so test failures come with the
/// crate's diagnostic events; safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Big-endian byte encoding of an unsigned integer, without leading zeros.
#[allow(dead_code)]
pub fn be_bytes(value: u128) -> Bytes {
    Bytes::from(BigInt::from(value).to_bytes_be().1)
}

/// Metadata fixture with byte-encoded decimals and supply.
#[allow(dead_code)]
pub fn metadata(decimals: u8, total_supply: u128, price: &str) -> Erc20Metadata {
    Erc20Metadata {
        name: "Test Token".to_string(),
        symbol: "TEST".to_string(),
        decimals: be_bytes(decimals as u128),
        total_supply: be_bytes(total_supply),
        price: Bytes::from(price.as_bytes().to_vec()),
    }
}

/// A deterministic set of `count` distinct transfer records.
#[allow(dead_code)]
pub fn transfer_fixture(count: usize) -> Vec<TransferRecord> {
    (0..count)
        .map(|i| TransferRecord {
            tx_hash: B256::repeat_byte(i as u8 + 1),
            from: Address::repeat_byte(0xaa),
            to: Address::repeat_byte(0xbb),
            amount: U256::from(1_000u64 * (i as u64 + 1)),
            block_number: 18_000_000 + i as u64,
            timestamp: DateTime::from_timestamp(1_700_000_000 + i as i64 * 12, 0)
                .expect("valid timestamp"),
        })
        .collect()
}
