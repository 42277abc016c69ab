// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # KEYSTONE — Threshold Secret Sharing Engine
//!
//! KEYSTONE splits a 32-byte secret into N shares such that any M of them
//! reconstruct it and any M−1 of them reveal nothing at all. That is the
//! whole pitch. It is Shamir's Secret Sharing over a 256-bit prime field,
//! implemented carefully, plus a small threshold cipher built on top of it
//! for secrets that don't fit in 32 bytes.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual layers of the
//! scheme:
//!
//! - **config** — Every constant of the engine: the prime, the lengths,
//!   the limits. Hardcode a magic number elsewhere and you owe the team coffee.
//! - **shamir** — The engine proper: field arithmetic, polynomial sampling,
//!   split, combine, verify.
//! - **cipher** — Threshold encryption: XOR a secret of any length with a
//!   fresh 32-byte key, then split the key. Read that module's warnings
//!   before using it for anything you care about.
//!
//! ## What this crate is not
//!
//! No storage, no authentication, no network transport, no AEAD. Shares come
//! back to you as plain values; getting them to N separate custodians and
//! back again is your job, and doing that safely is harder than it sounds.
//!
//! ## Design Philosophy
//!
//! 1. Correctness over performance (interpolation at threshold 10 is still
//!    microseconds; nobody is waiting on us).
//! 2. Secrets never reach logs. Not at trace level, not anywhere.
//! 3. Every operation is a pure function of its inputs plus the CSPRNG.
//!    No caches, no registries, nothing to poison between calls.
//! 4. If it guards a key, it has tests. Plural.

pub mod cipher;
pub mod config;
pub mod shamir;

// Re-export the things people actually need so they don't have to memorize
// our module hierarchy.
pub use cipher::{decrypt, encrypt, SealedSecret};
pub use shamir::{
    combine_shares, split_secret, verify_shares, SecretShare, ShareError, ThresholdConfig,
};
