//! Consistency checking for share sets.

use tracing::debug;

use crate::shamir::combine::combine_shares;
use crate::shamir::share::SecretShare;

/// Check that a share set is internally consistent against a claimed
/// threshold.
///
/// The test is cross-subset agreement: combine the first
/// `expected_threshold` shares, combine the overlapping subset shifted by
/// one, and compare the two reconstructions byte for byte. If all shares
/// lie on one polynomial of degree `expected_threshold − 1`, every subset
/// of that size interpolates to the same constant term; a tampered or
/// foreign share drags its subset to a different answer.
///
/// This is a safe probe, not an assertion: it never panics and never
/// returns an error. Too few shares is `false`. Malformed shares that trip
/// internal arithmetic are `false`. Use it as a preflight before trusting
/// [`combine_shares`], whose own contract checks nothing of the sort.
///
/// ## Honest limits
///
/// - With **exactly** `expected_threshold` shares there is no second subset
///   to compare, so the answer is `true` by default. A minimum-count share
///   set that is internally garbage cannot be caught here.
/// - Agreement between two subsets is strong evidence, not proof. This is
///   a consistency heuristic; it involves no commitments and no verifiable
///   secret sharing, and it cannot attribute blame to a specific bad share.
/// - A consistent share set says nothing about *which* secret it encodes.
pub fn verify_shares(shares: &[SecretShare], expected_threshold: usize) -> bool {
    if shares.len() < expected_threshold {
        return false;
    }

    let first = match combine_shares(&shares[..expected_threshold]) {
        Ok(secret) => secret,
        Err(_) => return false,
    };

    if shares.len() == expected_threshold {
        // No disjoint material left to cross-check against.
        return true;
    }

    let second = match combine_shares(&shares[1..=expected_threshold]) {
        Ok(secret) => secret,
        Err(_) => return false,
    };

    let consistent = first == second;
    debug!(expected_threshold, consistent, "verified share set");
    consistent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shamir::split::split_secret;

    fn shares_3_of_5() -> Vec<SecretShare> {
        split_secret(&[0x11u8; 32], 3, 5).unwrap()
    }

    #[test]
    fn accepts_a_fresh_split() {
        assert!(verify_shares(&shares_3_of_5(), 3));
    }

    #[test]
    fn rejects_too_few_shares() {
        let shares = shares_3_of_5();
        assert!(!verify_shares(&shares[..2], 3));
        assert!(!verify_shares(&[], 3));
    }

    #[test]
    fn exact_count_passes_without_cross_check() {
        // The documented blind spot: with only threshold-many shares there
        // is nothing to compare against, so even a tampered set passes.
        let mut shares = shares_3_of_5();
        shares.truncate(3);
        shares[0].value[12] ^= 0xFF;
        assert!(verify_shares(&shares, 3));
    }

    #[test]
    fn detects_a_tampered_share() {
        let mut shares = shares_3_of_5();
        shares[1].value[0] ^= 0x01;
        assert!(!verify_shares(&shares, 3));
    }

    #[test]
    fn degenerate_thresholds_are_false_not_panics() {
        let shares = shares_3_of_5();
        // combine_shares rejects subsets this small, and that surfaces as
        // a plain `false`.
        assert!(!verify_shares(&shares, 0));
        assert!(!verify_shares(&shares, 1));
    }

    #[test]
    fn duplicate_shares_are_false_not_errors() {
        let shares = shares_3_of_5();
        let dupes = vec![
            shares[0].clone(),
            shares[0].clone(),
            shares[1].clone(),
            shares[2].clone(),
        ];
        assert!(!verify_shares(&dupes, 3));
    }
}
