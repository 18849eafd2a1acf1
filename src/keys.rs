// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Permissive hex decoding of token and holder keys
//!
//! Token and holder identifiers arrive as untrusted hex-like strings, usually
//! with a `0x` prefix. Decoding is deliberately lenient: malformed input never
//! produces an error, it degrades to an empty key. Downstream code treats an
//! empty key exactly like "no key provided", so callers get a well-defined
//! result for every possible input string.

use std::borrow::Cow;

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Outcome of permissively decoding a hex-like key string.
///
/// The two variants make the "absent key" case explicit instead of hiding it
/// behind a zero-length byte vector.
///
/// # Decoding rules
///
/// - One optional, case-insensitive `0x` prefix is stripped.
/// - An odd number of hex digits is treated as having a leading zero nibble,
///   so `"0x1"` decodes to `0x01`.
/// - Decoding stops silently at the first non-hex byte pair; the bytes decoded
///   up to that point are kept.
/// - Anything that yields no bytes at all (empty input, bare `"0x"`, leading
///   garbage) becomes [`DecodedKey::Empty`].
///
/// # Examples
///
/// ```
/// use tokenview::DecodedKey;
///
/// let key = DecodedKey::decode("0xdeadbeef");
/// assert_eq!(key.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
///
/// assert!(DecodedKey::decode("not hex at all").is_empty());
/// assert!(DecodedKey::decode("").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedKey {
    /// At least one byte was decoded.
    Valid(Bytes),
    /// Nothing decodable was provided.
    Empty,
}

impl DecodedKey {
    /// Permissively decode a hex-like string into a key.
    pub fn decode(input: &str) -> Self {
        let stripped = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if stripped.is_empty() {
            return DecodedKey::Empty;
        }

        // Odd digit counts get a zero nibble in front, matching the common
        // permissive-decoder convention ("0x1" means 0x01).
        let padded: Cow<'_, str> = if stripped.len() % 2 == 1 {
            Cow::Owned(format!("0{stripped}"))
        } else {
            Cow::Borrowed(stripped)
        };

        let mut decoded = Vec::with_capacity(padded.len() / 2);
        for pair in padded.as_bytes().chunks_exact(2) {
            let hi = (pair[0] as char).to_digit(16);
            let lo = (pair[1] as char).to_digit(16);
            match (hi, lo) {
                (Some(hi), Some(lo)) => decoded.push((hi * 16 + lo) as u8),
                // First malformed pair ends the key; earlier bytes are kept.
                _ => break,
            }
        }

        if decoded.is_empty() {
            DecodedKey::Empty
        } else {
            DecodedKey::Valid(Bytes::from(decoded))
        }
    }

    /// Whether no bytes were decoded.
    pub fn is_empty(&self) -> bool {
        matches!(self, DecodedKey::Empty)
    }

    /// Decoded bytes; empty slice for [`DecodedKey::Empty`].
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DecodedKey::Valid(bytes) => bytes,
            DecodedKey::Empty => &[],
        }
    }
}

impl std::fmt::Display for DecodedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Decoded identifier of a token contract.
///
/// # Examples
///
/// ```
/// use tokenview::TokenKey;
///
/// let token = TokenKey::decode("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// assert_eq!(token.as_bytes().len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenKey(DecodedKey);

impl TokenKey {
    /// Permissively decode a token key from a hex-like string.
    pub fn decode(input: &str) -> Self {
        Self(DecodedKey::decode(input))
    }

    /// Wrap an already-decoded key.
    pub const fn new(key: DecodedKey) -> Self {
        Self(key)
    }

    /// Whether the key carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Decoded identifier of a holder account; optional.
///
/// An absent holder key means balance lookups are skipped entirely, which is
/// why the decoder never errors: a malformed holder parameter behaves exactly
/// like an omitted one.
///
/// # Examples
///
/// ```
/// use tokenview::AddressKey;
///
/// assert!(AddressKey::absent().is_empty());
/// assert!(AddressKey::decode("no hex here").is_empty());
/// assert!(!AddressKey::decode("0xAb5801a7D398351b8bE11C439e05C5b3259aec9B").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressKey(DecodedKey);

impl AddressKey {
    /// Permissively decode a holder key from a hex-like string.
    pub fn decode(input: &str) -> Self {
        Self(DecodedKey::decode(input))
    }

    /// The absent holder key.
    pub const fn absent() -> Self {
        Self(DecodedKey::Empty)
    }

    /// Decode an optional query value; `None` behaves like empty input.
    pub fn decode_opt(input: Option<&str>) -> Self {
        match input {
            Some(input) => Self::decode(input),
            None => Self::absent(),
        }
    }

    /// Whether the key carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for AddressKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
