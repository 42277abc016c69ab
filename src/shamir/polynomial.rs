//! Random polynomial sampling and evaluation.
//!
//! A split lives and dies with one of these: coefficient 0 is the secret,
//! the rest are fresh CSPRNG output, and the whole thing must be gone the
//! moment the shares exist. The type is crate-private, not `Clone`, and not
//! serializable, so a `Polynomial` cannot outlive the split that created it.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::config;
use crate::shamir::field;

/// A degree-`d` polynomial over the prime field, stored as coefficients
/// `[a0, a1, ..., ad]` in ascending-power order with `a0` the secret.
pub(crate) struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Sample a polynomial with the given constant term and `degree` random
    /// higher coefficients.
    ///
    /// Each coefficient is drawn as 32 bytes from the CSPRNG and reduced mod
    /// `p`; the raw bytes are wiped before the buffer is reused. `secret`
    /// must already be reduced, which the splitter guarantees.
    pub(crate) fn random<R: RngCore + CryptoRng>(
        secret: BigUint,
        degree: usize,
        rng: &mut R,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret);

        let mut buf = [0u8; config::SECRET_LENGTH];
        for _ in 0..degree {
            rng.fill_bytes(&mut buf);
            coefficients.push(BigUint::from_bytes_be(&buf) % config::prime());
        }
        buf.zeroize();

        Self { coefficients }
    }

    /// Evaluate at `x`, accumulating `coeff_i · x^i` with a running power:
    /// one modular multiplication per term instead of an exponentiation,
    /// and every intermediate stays below `p²`.
    pub(crate) fn evaluate(&self, x: &BigUint) -> BigUint {
        let mut result = BigUint::zero();
        let mut x_power = BigUint::one();
        for coeff in &self.coefficients {
            result = field::add(&result, &field::mul(coeff, &x_power));
            x_power = field::mul(&x_power, x);
        }
        result
    }

    #[cfg(test)]
    fn constant_term(&self) -> &BigUint {
        &self.coefficients[0]
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        // BigUint offers no in-place wipe, so the best available hygiene is
        // to overwrite each handle the moment the polynomial dies; the
        // 32-byte buffers the coefficients were drawn from are zeroized in
        // `random` above.
        for coeff in &mut self.coefficients {
            *coeff = BigUint::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed(coeffs: &[u64]) -> Polynomial {
        Polynomial {
            coefficients: coeffs.iter().map(|&c| BigUint::from(c)).collect(),
        }
    }

    #[test]
    fn evaluates_a_known_polynomial() {
        // f(x) = 3 + 2x + x²
        let poly = fixed(&[3, 2, 1]);
        assert_eq!(poly.evaluate(&BigUint::from(0u32)), BigUint::from(3u32));
        assert_eq!(poly.evaluate(&BigUint::from(1u32)), BigUint::from(6u32));
        assert_eq!(poly.evaluate(&BigUint::from(2u32)), BigUint::from(11u32));
        assert_eq!(poly.evaluate(&BigUint::from(10u32)), BigUint::from(123u32));
    }

    #[test]
    fn degree_zero_is_constant() {
        let poly = Polynomial::random(BigUint::from(77u32), 0, &mut OsRng);
        assert_eq!(poly.evaluate(&BigUint::from(1u32)), BigUint::from(77u32));
        assert_eq!(poly.evaluate(&BigUint::from(200u32)), BigUint::from(77u32));
    }

    #[test]
    fn constant_term_is_the_secret() {
        let secret = BigUint::from(0xABCDu32);
        let poly = Polynomial::random(secret.clone(), 4, &mut OsRng);
        assert_eq!(poly.constant_term(), &secret);
        assert_eq!(poly.coefficients.len(), 5);
    }

    #[test]
    fn coefficients_are_reduced() {
        let poly = Polynomial::random(BigUint::from(1u32), 16, &mut OsRng);
        for coeff in &poly.coefficients {
            assert!(coeff < config::prime());
        }
    }

    #[test]
    fn two_samples_differ() {
        // Identical higher coefficients across two draws would mean the RNG
        // is broken, at which point shares are the least of our worries.
        let secret = BigUint::from(5u32);
        let a = Polynomial::random(secret.clone(), 3, &mut OsRng);
        let b = Polynomial::random(secret, 3, &mut OsRng);
        assert_ne!(a.coefficients[1..], b.coefficients[1..]);
    }

    #[test]
    fn seeded_rng_reproduces_the_polynomial() {
        let secret = BigUint::from(99u32);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = Polynomial::random(secret.clone(), 3, &mut rng_a);
        let b = Polynomial::random(secret, 3, &mut rng_b);
        assert_eq!(a.coefficients, b.coefficients);
    }
}
