//! Error taxonomy for share operations.
//!
//! One variant per failure condition, every condition detectable from the
//! inputs alone, and every one raised before any arithmetic happens or any
//! randomness is consumed. Nothing in this engine is transient: if an
//! operation fails once, it fails every time with the same inputs, so there
//! is no retry story and no partial state to clean up.

use thiserror::Error;

use crate::config::{MAX_SHARES, MIN_THRESHOLD, SECRET_LENGTH, SHARE_VALUE_LENGTH};

/// Errors that can occur while splitting, combining, or transporting shares.
///
/// The messages name sizes and counts, never contents. Secret bytes and
/// share values do not belong in error strings, logs, or anything else that
/// might end up in a crash report.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The secret handed to the splitter is not exactly 32 bytes.
    #[error("secret must be exactly {SECRET_LENGTH} bytes, got {0}")]
    InvalidSecretLength(usize),

    /// The requested threshold is below 2.
    #[error("threshold must be at least {MIN_THRESHOLD}, got {0}")]
    ThresholdTooLow(usize),

    /// Too few shares: either a split requesting fewer total shares than its
    /// threshold, or a combine given fewer than two shares.
    #[error("need at least {needed} shares, got {got}")]
    InsufficientShares { needed: usize, got: usize },

    /// More total shares requested than the 255 available evaluation points.
    #[error("total shares may not exceed {MAX_SHARES}, got {0}")]
    TooManyShares(usize),

    /// Two shares in a combine carry the same index. Distinct x-coordinates
    /// are what make the Lagrange denominators invertible; with a repeat,
    /// interpolation is undefined rather than merely wrong.
    #[error("share index {0} appears more than once")]
    DuplicateShareIndex(u8),

    /// A hex-encoded share value failed to parse or had the wrong width.
    #[error("share value must be {SHARE_VALUE_LENGTH} hex-encoded bytes")]
    InvalidShareEncoding,
}
