//! # Shamir's Secret Sharing over a 256-bit Prime Field
//!
//! The engine room of KEYSTONE. A secret becomes the constant term of a
//! random polynomial of degree M−1; shares are evaluations of that
//! polynomial at x = 1, 2, ..., N; any M shares pin the polynomial down and
//! Lagrange interpolation at x = 0 recovers the secret. Fewer than M shares
//! are consistent with every possible secret, which is the entire point.
//!
//! The submodules follow the layers of the scheme:
//!
//! - **field** — Modular arithmetic over the fixed prime. Everything else
//!   is bookkeeping on top of these five functions.
//! - **polynomial** — Random polynomial sampling and evaluation. Private:
//!   a polynomial that escapes this module is a leaked secret.
//! - **share** — The value types that cross the API boundary.
//! - **split** / **combine** / **verify** — The three operations callers
//!   actually want.
//!
//! ## Two warnings worth repeating
//!
//! Shares are only meaningful together with the other shares from the same
//! split. Mixing shares from different splits produces garbage that is
//! indistinguishable from a valid reconstruction; no code here can detect it.
//!
//! [`combine_shares`] does not know your threshold. Hand it fewer shares
//! than the split used and it will cheerfully interpolate them into a
//! wrong answer. See its documentation before building anything on top.

pub mod combine;
pub mod error;
pub mod field;
pub mod share;
pub mod split;
pub mod verify;

mod polynomial;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use combine::combine_shares;
pub use error::ShareError;
pub use share::{SecretShare, ThresholdConfig};
pub use split::{split_secret, split_secret_with_rng};
pub use verify::verify_shares;
