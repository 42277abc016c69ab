//! # Engine Configuration & Constants
//!
//! Every magic number in KEYSTONE lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! The big one is the prime modulus. Everything in this crate is arithmetic
//! modulo that prime, and everything that leaves this crate is encoded
//! against the lengths below. Changing any of these invalidates every share
//! ever issued, so don't.

use std::sync::OnceLock;

use num_bigint::BigUint;

// ---------------------------------------------------------------------------
// The Prime Field
// ---------------------------------------------------------------------------

/// The prime modulus, hex-encoded: 2^256 − 189, the largest 256-bit prime.
///
/// Chosen for being a prime and being 256 bits. That's it. It is not the
/// order of any elliptic curve and never will be; shares produced here are
/// plain field elements, not curve points, and the field exists purely so
/// that polynomial interpolation has somewhere lawful to happen.
pub const PRIME_MODULUS_HEX: &str =
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff43";

/// The prime modulus as a ready-to-use big integer.
///
/// Materialized exactly once, then shared immutably for the life of the
/// process. There is no setter and there never will be; a secret-sharing
/// engine whose field can be swapped at runtime is a key-recovery engine
/// for whoever does the swapping.
pub fn prime() -> &'static BigUint {
    static PRIME: OnceLock<BigUint> = OnceLock::new();
    PRIME.get_or_init(|| {
        BigUint::parse_bytes(PRIME_MODULUS_HEX.as_bytes(), 16)
            .expect("PRIME_MODULUS_HEX is a valid hex literal")
    })
}

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

/// Secrets handed to the splitter are exactly this many bytes. A 32-byte
/// secret interpreted big-endian always fits the 256-bit field (modulo the
/// 189 values at the very top, which reduce on the way in).
pub const SECRET_LENGTH: usize = 32;

/// Share values are field elements serialized big-endian at this fixed
/// width, zero-padded on the left. Fixed width means a share is storable,
/// comparable, and transportable without a length prefix.
pub const SHARE_VALUE_LENGTH: usize = 32;

/// The threshold cipher's symmetric key length. Deliberately equal to
/// [`SECRET_LENGTH`] so the key itself is a splittable secret.
pub const CIPHER_KEY_LENGTH: usize = SECRET_LENGTH;

// ---------------------------------------------------------------------------
// Share-Count Limits
// ---------------------------------------------------------------------------

/// The smallest threshold that means anything. A threshold of 1 is not
/// secret sharing, it's photocopying.
pub const MIN_THRESHOLD: usize = 2;

/// Share indices are a single byte and index 0 is forbidden (evaluating the
/// polynomial at x = 0 would hand out the secret verbatim), which leaves
/// exactly 255 usable evaluation points.
pub const MAX_SHARES: usize = 255;

/// Reconstruction needs at least two points; one point determines no
/// polynomial of degree ≥ 1.
pub const MIN_COMBINE_SHARES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn prime_is_256_bits() {
        assert_eq!(prime().bits(), 256);
    }

    #[test]
    fn prime_hex_round_trips() {
        let hex = format!("{:064x}", prime());
        assert_eq!(hex, PRIME_MODULUS_HEX);
    }

    #[test]
    fn prime_is_two_to_256_minus_189() {
        let two_256 = BigUint::one() << 256;
        assert_eq!(prime() + 189u32, two_256);
    }

    #[test]
    fn prime_passes_fermat_base_two() {
        // Not a primality proof, but 2^(p-1) ≡ 1 (mod p) catches a mistyped
        // constant instantly.
        let p = prime();
        let exp = p - 1u32;
        assert!(BigUint::from(2u32).modpow(&exp, p).is_one());
    }

    #[test]
    fn limits_are_coherent() {
        assert!(MIN_THRESHOLD >= MIN_COMBINE_SHARES);
        assert!(MIN_THRESHOLD <= MAX_SHARES);
        assert_eq!(MAX_SHARES, u8::MAX as usize);
        assert_eq!(SECRET_LENGTH, SHARE_VALUE_LENGTH);
        assert_eq!(CIPHER_KEY_LENGTH, SECRET_LENGTH);
    }
}
