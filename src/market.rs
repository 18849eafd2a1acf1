// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal market math
//!
//! Market cap and exchange rate are money; computing them through binary
//! floating point accumulates representation error on every step. All
//! intermediate math here runs on [`BigDecimal`] over arbitrary-precision
//! integers, and only the final render step rounds to a fixed number of
//! fractional digits.
//!
//! Normalizing a supply by `10^decimals` is a pure decimal-point shift, so
//! `BigDecimal::new(supply, decimals)` expresses the division exactly without
//! ever performing one.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use num_bigint::BigInt;
use tracing::warn;

use crate::token_types::Erc20Metadata;

/// Derived market figures for a token, computed exactly.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Bytes;
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use tokenview::{Erc20Metadata, MarketFigures};
///
/// // 1 whole token (18 decimals) priced at 2.50
/// let metadata = Erc20Metadata {
///     name: String::new(),
///     symbol: String::new(),
///     decimals: Bytes::from(vec![18]),
///     total_supply: Bytes::from(1_000_000_000_000_000_000u64.to_be_bytes().to_vec()),
///     price: Bytes::from("2.50".as_bytes().to_vec()),
/// };
///
/// let figures = MarketFigures::compute(&metadata, &BigDecimal::from(2));
/// assert_eq!(figures.normalized_supply, BigDecimal::from(1));
/// assert_eq!(figures.market_cap_display(), "2.50");
/// assert_eq!(figures.exchange_rate, BigDecimal::from_str("1.25").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketFigures {
    /// Effective fiat price per whole token; zero when the price string was
    /// empty or unparsable.
    pub token_price: BigDecimal,
    /// Total supply divided by `10^decimals`.
    pub normalized_supply: BigDecimal,
    /// `token_price * normalized_supply`.
    pub market_cap: BigDecimal,
    /// Currently identical to `market_cap`; kept as a separate field until a
    /// circulating-vs-diluted supply distinction exists.
    pub diluted_market_cap: BigDecimal,
    /// Token price in the chain's native currency; zero when the fiat rate
    /// is zero.
    pub exchange_rate: BigDecimal,
}

impl MarketFigures {
    /// Compute all derived figures from metadata and the native currency's
    /// fiat rate.
    ///
    /// Never fails: a bad price string degrades to zero and a zero fiat rate
    /// degrades the exchange rate to zero, both with a diagnostic event.
    pub fn compute(metadata: &Erc20Metadata, native_fiat_rate: &BigDecimal) -> Self {
        let token_price = parse_price(metadata.price_str());
        let normalized_supply =
            normalized_supply(metadata.total_supply_int(), metadata.decimals_int());

        let market_cap = &token_price * &normalized_supply;

        let exchange_rate = if native_fiat_rate.is_zero() {
            BigDecimal::zero()
        } else {
            &token_price / native_fiat_rate
        };

        Self {
            token_price,
            normalized_supply,
            market_cap: market_cap.clone(),
            diluted_market_cap: market_cap,
            exchange_rate,
        }
    }

    /// Market cap rendered with two fractional digits and thousands
    /// separators.
    pub fn market_cap_display(&self) -> String {
        format_thousands(&self.market_cap)
    }
}

/// Parse a fiat price string into an exact decimal.
///
/// Empty or unparsable input resolves to zero; the bad input is recorded for
/// diagnostics but never surfaced to the caller.
pub fn parse_price(price: &str) -> BigDecimal {
    if price.is_empty() {
        return BigDecimal::zero();
    }
    match price.parse::<BigDecimal>() {
        Ok(value) => value,
        Err(e) => {
            warn!(price = %price, error = %e, "Failed to parse token price string, using zero");
            BigDecimal::zero()
        }
    }
}

/// Divide a raw supply by `10^decimals`, exactly.
///
/// The decimals exponent is arbitrary precision on the wire; values beyond
/// `i64` cannot be represented as a decimal scale, and a supply divided by
/// such a factor is indistinguishable from zero anyway.
pub fn normalized_supply(total_supply: BigInt, decimals: BigInt) -> BigDecimal {
    match i64::try_from(&decimals) {
        Ok(scale) => BigDecimal::new(total_supply, scale),
        Err(_) => {
            warn!(decimals = %decimals, "Token decimals exceed representable scale, treating normalized supply as zero");
            BigDecimal::zero()
        }
    }
}

/// Render a decimal with two fractional digits and English thousands
/// separators: `1234567.891` becomes `1,234,567.89`.
pub fn format_thousands(value: &BigDecimal) -> String {
    let rounded = value.with_scale_round(2, RoundingMode::HalfUp);
    let rendered = rounded.to_string();

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{frac_part}")
}
