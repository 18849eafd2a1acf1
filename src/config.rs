// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for token view aggregation
//!
//! # Example: Using defaults
//!
//! ```rust
//! use tokenview::TokenViewConfig;
//!
//! let config = TokenViewConfig::default();
//! assert_eq!(config.max_in_flight_lookups, 3);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use tokenview::{FiatCode, TokenViewConfigBuilder};
//!
//! let config = TokenViewConfigBuilder::with_defaults()
//!     .fiat(FiatCode::new("EUR"))
//!     .no_placeholder_price()
//!     .build();
//! assert!(config.placeholder_price.is_none());
//! ```

use crate::source::FiatCode;

/// Development stand-in price applied when the data source reports an empty
/// price field.
///
/// This literal mirrors the behavior the token page shipped with and exists
/// so that pages for unpriced tokens render non-degenerate market figures
/// during development. It is NOT market data. Production deployments should
/// disable it via [`TokenViewConfigBuilder::no_placeholder_price`] so that
/// unpriced tokens compute as zero instead.
pub const DEV_PLACEHOLDER_PRICE: &str = "32.523423";

/// Hard cap on concurrently in-flight data-source lookups per aggregation
/// request.
///
/// There are currently at most three candidate lookups, so the default never
/// throttles below natural parallelism; it bounds worst-case fan-out if more
/// sources are added.
pub const DEFAULT_MAX_IN_FLIGHT_LOOKUPS: usize = 3;

/// Configuration for token view aggregation.
///
/// Use [`TokenViewConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct TokenViewConfig {
    /// Maximum number of data-source lookups in flight at once.
    /// Default: [`DEFAULT_MAX_IN_FLIGHT_LOOKUPS`]
    pub max_in_flight_lookups: usize,

    /// Fiat currency the native-chain-currency rate is quoted in.
    /// Default: USD
    pub fiat: FiatCode,

    /// Price substituted when metadata carries an empty price field.
    /// Default: `Some(DEV_PLACEHOLDER_PRICE)`; `None` means an empty price
    /// computes as zero.
    pub placeholder_price: Option<String>,
}

impl Default for TokenViewConfig {
    fn default() -> Self {
        Self {
            max_in_flight_lookups: DEFAULT_MAX_IN_FLIGHT_LOOKUPS,
            fiat: FiatCode::usd(),
            placeholder_price: Some(DEV_PLACEHOLDER_PRICE.to_string()),
        }
    }
}

/// Fluent builder for [`TokenViewConfig`].
#[derive(Debug, Clone, Default)]
pub struct TokenViewConfigBuilder {
    config: TokenViewConfig,
}

impl TokenViewConfigBuilder {
    /// Start from the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the in-flight lookup cap; values below 1 are clamped to 1.
    pub fn max_in_flight_lookups(mut self, limit: usize) -> Self {
        self.config.max_in_flight_lookups = limit.max(1);
        self
    }

    /// Set the fiat currency for the native-currency rate.
    pub fn fiat(mut self, fiat: FiatCode) -> Self {
        self.config.fiat = fiat;
        self
    }

    /// Set the price substituted for an empty metadata price field.
    pub fn placeholder_price(mut self, price: impl Into<String>) -> Self {
        self.config.placeholder_price = Some(price.into());
        self
    }

    /// Disable placeholder substitution; empty prices compute as zero.
    pub fn no_placeholder_price(mut self) -> Self {
        self.config.placeholder_price = None;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TokenViewConfig {
        self.config
    }
}
