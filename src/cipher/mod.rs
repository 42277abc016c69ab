//! # Threshold Encryption
//!
//! For secrets that don't fit the splitter's fixed 32 bytes: encrypt the
//! payload with a fresh random 32-byte key, then split the *key* M-of-N.
//! The ciphertext is useless without the key, the key is unreachable
//! without M custodians, and the payload can be any length at all.
//!
//! ## Read this before shipping it
//!
//! The cipher is a repeating-key XOR: byte `i` of the plaintext is XORed
//! with byte `i mod 32` of the key. For payloads up to 32 bytes that is a
//! one-time pad and information-theoretically fine. Beyond 32 bytes the
//! key stream repeats, and repeating-key XOR against structured or
//! repetitive plaintext is a cipher that falls to pencil and paper; it is
//! kept byte-compatible here because deployed ciphertexts exist, not
//! because it is good. There is also no authentication tag of any kind: a
//! flipped ciphertext bit is a flipped plaintext bit and nobody will tell
//! you. Do not reach for this module when an AEAD under a properly shared
//! key is an option.
//!
//! Key custody rules still apply to the output: [`SealedSecret::key_shares`]
//! ARE the key once M of them meet. Store them with separate custodians,
//! never alongside the ciphertext.

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

use crate::config::CIPHER_KEY_LENGTH;
use crate::shamir::combine::combine_shares;
use crate::shamir::error::ShareError;
use crate::shamir::share::{SecretShare, ThresholdConfig};
use crate::shamir::split::split_secret_with_rng;

/// The output of [`encrypt`]: an opaque ciphertext plus the N shares of
/// the key that sealed it.
///
/// The ciphertext has exactly the plaintext's length. The key itself is
/// generated, used, split, and wiped inside one call; it never appears
/// here or anywhere else.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedSecret {
    /// XOR ciphertext, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// The key, split `threshold`-of-`total_shares`. Distribute these;
    /// any `threshold` of them reopen the ciphertext.
    pub key_shares: Vec<SecretShare>,
}

/// Encrypt a secret of any length under a fresh key and split that key
/// `threshold`-of-`total_shares`.
///
/// Parameter validation happens before the key is generated, so a bad
/// threshold consumes no randomness. The plaintext may be empty, 32 bytes,
/// or a megabyte; see the module docs for why long payloads are a bad idea.
///
/// # Example
///
/// ```
/// use keystone::cipher;
///
/// let sealed = cipher::encrypt(b"the vault combination is 6-32-17", 2, 4).unwrap();
/// let opened = cipher::decrypt(&sealed.ciphertext, &sealed.key_shares[..2]).unwrap();
/// assert_eq!(opened, b"the vault combination is 6-32-17");
/// ```
pub fn encrypt(
    secret: &[u8],
    threshold: usize,
    total_shares: usize,
) -> Result<SealedSecret, ShareError> {
    encrypt_with_rng(secret, threshold, total_shares, &mut OsRng)
}

/// [`encrypt`] with an explicit RNG, for reproducible tests.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    threshold: usize,
    total_shares: usize,
    rng: &mut R,
) -> Result<SealedSecret, ShareError> {
    let params = ThresholdConfig::new(threshold, total_shares)?;

    debug!(
        threshold,
        total_shares,
        secret_len = secret.len(),
        "sealing secret under a threshold key"
    );

    let mut key = [0u8; CIPHER_KEY_LENGTH];
    rng.fill_bytes(&mut key);

    let ciphertext = xor_with_key(secret, &key);
    let key_shares = split_secret_with_rng(&key, params.threshold, params.total_shares, rng)?;
    key.zeroize();

    Ok(SealedSecret {
        ciphertext,
        key_shares,
    })
}

/// Recover the plaintext from a ciphertext and at least M key shares.
///
/// The key is rebuilt with [`combine_shares`] and the XOR reversed, then
/// the key buffer is wiped. Everything `combine_shares` does not check,
/// this does not check either: too few shares, shares from a different
/// seal, or a tampered ciphertext all produce silent garbage rather than
/// an error. Run [`crate::shamir::verify_shares`] first if you need the
/// share set vetted.
pub fn decrypt(ciphertext: &[u8], key_shares: &[SecretShare]) -> Result<Vec<u8>, ShareError> {
    let mut key = combine_shares(key_shares)?;
    let plaintext = xor_with_key(ciphertext, &key);
    key.zeroize();

    debug!(
        shares_used = key_shares.len(),
        payload_len = ciphertext.len(),
        "unsealed secret"
    );
    Ok(plaintext)
}

/// XOR `data` against `key` repeated cyclically. Involutive: applying it
/// twice with the same key is the identity, which is the whole cipher.
fn xor_with_key(data: &[u8], key: &[u8; CIPHER_KEY_LENGTH]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % CIPHER_KEY_LENGTH])
        .collect()
}
