//! Pseudorandom challenge generator (C5).
//!
//! The bit stream is protocol-normative (see `spec.md` §4.5/§9): it is not
//! a clean-slate PRNG design, but it must match byte-for-byte across any
//! conforming prover/verifier pair, so the construction below reproduces
//! it exactly rather than substituting a cleaner one.

use crate::primitives::{hash, PRNG_RESEED_THRESHOLD};
use serde::{Deserialize, Serialize};

/// `n_sub` independent direction bitstrings, each `depth` bits long,
/// packed row-major.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Challenge {
    pub directions: Vec<Vec<bool>>,
}

/// A 256-bit unsigned integer stored big-endian, with just the operations
/// the bit stream needs: compare-to-threshold, low bit, halve.
struct BigUint256([u8; 32]);

impl BigUint256 {
    fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// `true` iff the integer is strictly less than `n`.
    fn less_than(&self, n: u32) -> bool {
        let mut threshold = [0u8; 32];
        threshold[28..].copy_from_slice(&n.to_be_bytes());
        self.0 < threshold
    }

    fn low_bit(&self) -> bool {
        self.0[31] & 1 == 1
    }

    /// Divides by two, rounding toward zero (an arithmetic right shift by
    /// one bit over the big-endian byte representation).
    fn halve(&mut self) {
        let mut carry = 0u8;
        for byte in self.0.iter_mut() {
            let next_carry = *byte & 1;
            *byte = (*byte >> 1) | (carry << 7);
            carry = next_carry;
        }
    }
}

/// Derives `n_sub` direction bitstrings of length `depth` from `seed`.
pub fn generate(seed: &[u8], n_sub: usize, depth: u32) -> Challenge {
    if depth == 0 {
        return Challenge {
            directions: vec![Vec::new(); n_sub],
        };
    }

    let mut x = BigUint256::from_bytes(hash(seed));
    let total_bits = n_sub * depth as usize;
    let mut bits = Vec::with_capacity(total_bits);

    while bits.len() < total_bits {
        if x.less_than(PRNG_RESEED_THRESHOLD) {
            x = BigUint256::from_bytes(hash(&x.0));
        }
        bits.push(x.low_bit());
        x.halve();
    }

    let directions = bits
        .chunks(depth as usize)
        .map(|row| row.to_vec())
        .collect();

    Challenge { directions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic_for_a_given_seed() {
        let a = generate(b"hello world", 5, 7);
        let b = generate(b"hello world", 5, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate(b"hello world", 5, 7);
        let b = generate(b"goodbye world", 5, 7);
        assert_ne!(a, b);
    }

    #[test]
    fn shape_matches_n_sub_and_depth() {
        let c = generate(b"seed", 5, 7);
        assert_eq!(c.directions.len(), 5);
        assert!(c.directions.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn zero_depth_yields_empty_rows() {
        let c = generate(b"seed", 3, 0);
        assert_eq!(c.directions.len(), 3);
        assert!(c.directions.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn halve_matches_integer_division_by_two() {
        let mut x = BigUint256::from_bytes([0xff; 32]);
        let before = u128::from_be_bytes(x.0[16..].try_into().unwrap());
        x.halve();
        let after = u128::from_be_bytes(x.0[16..].try_into().unwrap());
        assert_eq!(after, before / 2);
    }

    #[test]
    fn less_than_threshold_boundary() {
        let mut bytes = [0u8; 32];
        bytes[31] = 255;
        bytes[30] = 3; // 0x03ff = 1023
        assert!(BigUint256::from_bytes(bytes).less_than(1024));
        bytes[30] = 4; // 0x0400 = 1024
        bytes[31] = 0;
        assert!(!BigUint256::from_bytes(bytes).less_than(1024));
    }
}
