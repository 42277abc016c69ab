//! Splitting a secret into shares.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use tracing::debug;

use crate::config::{self, SECRET_LENGTH};
use crate::shamir::error::ShareError;
use crate::shamir::polynomial::Polynomial;
use crate::shamir::share::{SecretShare, ThresholdConfig};

/// Split a 32-byte secret into `total_shares` shares, any `threshold` of
/// which reconstruct it.
///
/// The secret becomes the constant term of a fresh random polynomial of
/// degree `threshold − 1`; each share is the polynomial evaluated at
/// x = 1, 2, ..., `total_shares`, so indices come back sequential from 1.
/// x = 0 is never evaluated, because f(0) is the secret. The polynomial is
/// dropped before this function returns and is not recoverable afterwards
/// from anything the engine keeps.
///
/// Validation runs before any randomness is consumed, in a fixed order:
/// secret length, then threshold floor, then share count versus threshold,
/// then the 255-share ceiling. Each failure is its own [`ShareError`]
/// variant.
///
/// One encoding caveat: the secret is interpreted as a big-endian integer
/// and reduced mod `p` = 2^256 − 189. The 189 byte-strings at the very top
/// of the 32-byte range reconstruct to their residue, not their original
/// bytes. Keys produced by any honest generator miss that window with
/// probability 1 − 2^−248; if your secrets are adversarially chosen to sit
/// there, reduce them yourself first.
///
/// # Example
///
/// ```
/// use keystone::{combine_shares, split_secret};
///
/// let secret = [7u8; 32];
/// let shares = split_secret(&secret, 3, 5).unwrap();
/// assert_eq!(shares.len(), 5);
/// assert_eq!(combine_shares(&shares[..3]).unwrap(), secret);
/// ```
pub fn split_secret(
    secret: &[u8],
    threshold: usize,
    total_shares: usize,
) -> Result<Vec<SecretShare>, ShareError> {
    split_secret_with_rng(secret, threshold, total_shares, &mut OsRng)
}

/// [`split_secret`] with an explicit RNG.
///
/// Production callers want [`split_secret`] and the OS CSPRNG. This variant
/// exists so tests can pass a seeded `StdRng` and get reproducible
/// polynomials; any `RngCore + CryptoRng` source works.
pub fn split_secret_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    threshold: usize,
    total_shares: usize,
    rng: &mut R,
) -> Result<Vec<SecretShare>, ShareError> {
    if secret.len() != SECRET_LENGTH {
        return Err(ShareError::InvalidSecretLength(secret.len()));
    }
    let params = ThresholdConfig::new(threshold, total_shares)?;

    debug!(threshold, total_shares, "splitting secret");

    let secret_element = BigUint::from_bytes_be(secret) % config::prime();
    let polynomial = Polynomial::random(secret_element, params.threshold - 1, rng);

    let shares = (1..=params.total_shares)
        .map(|index| {
            let y = polynomial.evaluate(&BigUint::from(index));
            SecretShare::from_field_element(index as u8, &y)
        })
        .collect();

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn secret() -> [u8; SECRET_LENGTH] {
        let mut s = [0u8; SECRET_LENGTH];
        for (i, byte) in s.iter_mut().enumerate() {
            *byte = i as u8;
        }
        s
    }

    #[test]
    fn indices_are_sequential_from_one() {
        let shares = split_secret(&secret(), 3, 5).unwrap();
        let indices: Vec<u8> = shares.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_wrong_secret_length() {
        assert!(matches!(
            split_secret(&[0u8; 16], 2, 3),
            Err(ShareError::InvalidSecretLength(16))
        ));
        assert!(matches!(
            split_secret(&[], 2, 3),
            Err(ShareError::InvalidSecretLength(0))
        ));
    }

    #[test]
    fn secret_length_is_checked_first() {
        // A short secret with an absurd threshold still reports the length
        // problem; validation order is part of the contract.
        assert!(matches!(
            split_secret(&[0u8; 16], 1, 0),
            Err(ShareError::InvalidSecretLength(16))
        ));
    }

    #[test]
    fn rejects_bad_parameters() {
        let s = secret();
        assert!(matches!(
            split_secret(&s, 1, 5),
            Err(ShareError::ThresholdTooLow(1))
        ));
        assert!(matches!(
            split_secret(&s, 4, 3),
            Err(ShareError::InsufficientShares { needed: 4, got: 3 })
        ));
        assert!(matches!(
            split_secret(&s, 2, 256),
            Err(ShareError::TooManyShares(256))
        ));
    }

    #[test]
    fn accepts_the_boundaries() {
        let s = secret();
        assert_eq!(split_secret(&s, 2, 2).unwrap().len(), 2);
        assert_eq!(split_secret(&s, 2, 255).unwrap().len(), 255);
        assert_eq!(split_secret(&s, 255, 255).unwrap().len(), 255);
    }

    #[test]
    fn shares_do_not_echo_the_secret() {
        // f(x) for x ≠ 0 should essentially never equal f(0).
        let s = secret();
        for share in split_secret(&s, 2, 5).unwrap() {
            assert_ne!(share.value, s);
        }
    }

    #[test]
    fn seeded_rng_makes_splits_reproducible() {
        let s = secret();
        let a = split_secret_with_rng(&s, 3, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = split_secret_with_rng(&s, 3, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);

        let c = split_secret_with_rng(&s, 3, 5, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_ne!(a, c);
    }
}
