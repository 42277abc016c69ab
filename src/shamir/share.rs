//! The value types that cross the API boundary: shares and split parameters.
//!
//! A share is a point on a polynomial nobody is allowed to remember:
//! x-coordinate in `index`, y-coordinate serialized as 32 big-endian bytes
//! in `value`. Shares from the same split belong together forever; a share
//! on its own, or mixed into the wrong set, is just 33 bytes of noise.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_SHARES, MIN_THRESHOLD, SHARE_VALUE_LENGTH};
use crate::shamir::error::ShareError;

/// One share of a split secret.
///
/// Independent, immutable, and only meaningful alongside the other shares
/// from the same split. The engine cannot tell shares from different splits
/// apart; keep the grouping intact at whatever layer stores or ships them,
/// and keep `(index, value)` paired atomically while doing so.
///
/// ## Serialization
///
/// `SecretShare` derives `Serialize`/`Deserialize` so custodial layers can
/// ship it as a unit, and offers [`value_hex`](Self::value_hex) /
/// [`from_hex`](Self::from_hex) for text transports. The `Debug` impl
/// redacts the value: a share IS key material once enough of its siblings
/// are in the same place, and key material does not go to logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretShare {
    /// The x-coordinate the polynomial was evaluated at. Never 0 (that
    /// point is the secret itself) and unique within a split.
    pub index: u8,
    /// The y-coordinate: a field element, 32 bytes big-endian, zero-padded
    /// on the left.
    pub value: [u8; SHARE_VALUE_LENGTH],
}

impl SecretShare {
    /// Build a share from raw parts.
    pub fn new(index: u8, value: [u8; SHARE_VALUE_LENGTH]) -> Self {
        Self { index, value }
    }

    /// Build a share from an already-reduced field element.
    pub(crate) fn from_field_element(index: u8, value: &BigUint) -> Self {
        Self {
            index,
            value: element_to_bytes(value),
        }
    }

    /// The share value as a field element, ready for interpolation.
    pub(crate) fn value_element(&self) -> BigUint {
        BigUint::from_bytes_be(&self.value)
    }

    /// The share value hex-encoded, for text transports and backups.
    pub fn value_hex(&self) -> String {
        hex::encode(self.value)
    }

    /// Rebuild a share from an index and a hex-encoded value.
    ///
    /// The value must decode to exactly 32 bytes; anything else is
    /// [`ShareError::InvalidShareEncoding`].
    pub fn from_hex(index: u8, value_hex: &str) -> Result<Self, ShareError> {
        let bytes = hex::decode(value_hex).map_err(|_| ShareError::InvalidShareEncoding)?;
        let value: [u8; SHARE_VALUE_LENGTH] = bytes
            .try_into()
            .map_err(|_| ShareError::InvalidShareEncoding)?;
        Ok(Self { index, value })
    }
}

impl fmt::Debug for SecretShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretShare")
            .field("index", &self.index)
            .field("value", &"[redacted]")
            .finish()
    }
}

/// Serialize a reduced field element as 32 bytes big-endian, zero-padded on
/// the left. Every value this crate produces is `< p < 2^256`, so it fits.
pub(crate) fn element_to_bytes(value: &BigUint) -> [u8; SHARE_VALUE_LENGTH] {
    let raw = value.to_bytes_be();
    debug_assert!(raw.len() <= SHARE_VALUE_LENGTH, "element wider than the field");
    let mut out = [0u8; SHARE_VALUE_LENGTH];
    out[SHARE_VALUE_LENGTH - raw.len()..].copy_from_slice(&raw);
    out
}

/// Split-time parameters: reconstruct with any `threshold` of
/// `total_shares` shares.
///
/// This is an argument bundle, not a persisted entity. In particular the
/// combiner never sees it; see [`crate::shamir::combine_shares`] for why
/// that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Minimum number of shares that reconstruct the secret (M).
    pub threshold: usize,
    /// Total number of shares issued (N).
    pub total_shares: usize,
}

impl ThresholdConfig {
    /// Validate and build a config. The checks run in a fixed order so each
    /// bad input maps to one specific error:
    /// threshold ≥ 2, then total ≥ threshold, then total ≤ 255.
    pub fn new(threshold: usize, total_shares: usize) -> Result<Self, ShareError> {
        if threshold < MIN_THRESHOLD {
            return Err(ShareError::ThresholdTooLow(threshold));
        }
        if total_shares < threshold {
            return Err(ShareError::InsufficientShares {
                needed: threshold,
                got: total_shares,
            });
        }
        if total_shares > MAX_SHARES {
            return Err(ShareError::TooManyShares(total_shares));
        }
        Ok(Self {
            threshold,
            total_shares,
        })
    }
}
