//! Reconstructing a secret from shares.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::{MIN_COMBINE_SHARES, SECRET_LENGTH};
use crate::shamir::error::ShareError;
use crate::shamir::field;
use crate::shamir::share::{element_to_bytes, SecretShare};

/// Reconstruct a secret from shares by Lagrange interpolation at x = 0.
///
/// For each share `i`, the basis coefficient
/// `L_i = Π_{j≠i} (0 − x_j) / (x_i − x_j) (mod p)` is accumulated with
/// [`field::mod_inverse`] doing the division, and the secret is
/// `Σ y_i · L_i (mod p)`, returned as 32 big-endian bytes.
///
/// # This function does not know your threshold
///
/// Read this twice before building on it. A share carries no record of the
/// threshold it was split under, so `combine_shares` accepts **any** two or
/// more shares and interpolates them. Give it fewer shares than the split's
/// threshold and it returns a perfectly well-formed 32-byte value that is,
/// with overwhelming probability, **not your secret**. No error, no
/// warning. That is information theory, not an implementation gap: below
/// the threshold, the shares are consistent with every possible secret, so
/// there is nothing to detect a mistake against.
///
/// If you need to know the share set is sufficient and consistent, run
/// [`crate::shamir::verify_shares`] first or track the threshold yourself
/// next to wherever you store the shares.
///
/// # Errors
///
/// - [`ShareError::InsufficientShares`] for fewer than two shares.
/// - [`ShareError::DuplicateShareIndex`] if two shares carry the same
///   index. A repeated x-coordinate makes a Lagrange denominator zero, so
///   the set is rejected up front rather than divided by nothing later.
pub fn combine_shares(shares: &[SecretShare]) -> Result<[u8; SECRET_LENGTH], ShareError> {
    if shares.len() < MIN_COMBINE_SHARES {
        return Err(ShareError::InsufficientShares {
            needed: MIN_COMBINE_SHARES,
            got: shares.len(),
        });
    }

    let mut seen = [false; 256];
    for share in shares {
        if seen[share.index as usize] {
            return Err(ShareError::DuplicateShareIndex(share.index));
        }
        seen[share.index as usize] = true;
    }

    let zero = BigUint::zero();
    let mut secret = BigUint::zero();

    for (i, share) in shares.iter().enumerate() {
        let x_i = BigUint::from(share.index);
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = BigUint::from(other.index);
            numerator = field::mul(&numerator, &field::sub(&zero, &x_j));
            denominator = field::mul(&denominator, &field::sub(&x_i, &x_j));
        }

        // Indices are distinct, so the denominator is a product of nonzero
        // differences and must be invertible; a `None` here means the share
        // set was degenerate in a way the checks above missed.
        let inverse = field::mod_inverse(&denominator)
            .ok_or(ShareError::DuplicateShareIndex(share.index))?;
        let basis = field::mul(&numerator, &inverse);
        secret = field::add(&secret, &field::mul(&share.value_element(), &basis));
    }

    Ok(element_to_bytes(&secret))
}
