//! Modular arithmetic over the fixed 256-bit prime.
//!
//! Five operations, all working in `[0, p)` with `p` from [`crate::config`].
//! The values are 256 bits, so everything runs on `BigUint`; fixed-width
//! machine arithmetic would silently wrap and corrupt the field, which in a
//! secret-sharing scheme means corrupting secrets.
//!
//! Callers are expected to hand in operands already reduced mod `p`. The
//! functions reduce their results, so composing them keeps everything in
//! range; feeding in a value ≥ `p` is not an error, it just means you were
//! working with that value's residue all along.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::config;

/// `(a + b) mod p`.
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % config::prime()
}

/// `(a − b) mod p`, normalized into `[0, p)`.
///
/// `BigUint` has no negative values, so the subtraction is lifted by one
/// modulus before it happens: `(a + p − b) mod p`.
pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    let p = config::prime();
    ((a % p) + p - (b % p)) % p
}

/// `(a · b) mod p`.
pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % config::prime()
}

/// `base^exp mod p` by square-and-multiply.
pub fn pow(base: &BigUint, exp: &BigUint) -> BigUint {
    base.modpow(exp, config::prime())
}

/// The multiplicative inverse of `a` mod `p`, via the extended Euclidean
/// algorithm.
///
/// Returns `None` exactly when `a ≡ 0 (mod p)`, the one element with no
/// inverse. The interpolation code only ever inverts products of
/// differences of distinct share indices, which are nonzero mod `p`, so a
/// `None` reaching a caller there means the share set itself was degenerate.
///
/// The Bézout coefficient the algorithm produces can be negative, so the
/// loop runs on signed `BigInt` and the result is normalized into `[0, p)`
/// at the end.
pub fn mod_inverse(a: &BigUint) -> Option<BigUint> {
    let p = config::prime();
    let a = a % p;
    if a.is_zero() {
        return None;
    }

    // Invariant throughout: old_r = old_s·a (mod p), r = s·a (mod p).
    let mut old_r = BigInt::from(a);
    let mut r = BigInt::from(p.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    // gcd(a, p) landed in old_r. p is prime, so the gcd is 1 for every
    // nonzero a; anything else would mean the modulus is not what we think.
    if !old_r.is_one() {
        return None;
    }

    let p = BigInt::from(p.clone());
    let normalized = ((old_s % &p) + &p) % &p;
    normalized.to_biguint()
}
