//! Candidate generation and the multiplier-automorphism skip rule.
//!
//! Multiplying every vertex by a unit `u` of Z/nZ maps the graph of `(a, b)`
//! onto the graph of `(u·a, u·b)`. Whenever `a` is a unit, `u = a⁻¹` turns the
//! pair into `(1, b·a⁻¹)`, so only `a == 1` needs to be tested from that orbit.

use crate::arith::{is_coprime, mod_inverse, prime_factors};
use itertools::Itertools;

/// Integers in `[2, n-1]` sharing a prime factor with `n`.
#[derive(Debug, Clone)]
pub struct PruningIndex {
    shared: Vec<bool>,
}

impl PruningIndex {
    pub fn new(n: usize) -> Self {
        let primes = prime_factors(n);
        let mut shared = vec![false; n];
        for i in 2..n {
            shared[i] = primes.iter().any(|p| i % p == 0);
        }
        PruningIndex { shared }
    }

    pub fn contains(&self, i: usize) -> bool {
        self.shared.get(i).copied().unwrap_or(false)
    }

    /// Members of the shared-factor set in ascending order.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.shared.iter().positions(|&s| s)
    }

    /// `true` if `(a, b)` has to be tested against the representatives.
    pub fn admits(&self, a: usize, b: usize) -> bool {
        a == 1 || (self.contains(a) && self.contains(b))
    }
}

/// All pairs `1 <= a < b <= n-1`, ordered by `a` then `b`.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n.max(1)).tuple_combinations()
}

/// For a unit `a`, the `a == 1` pair that `(a, b)` is equivalent to.
pub fn canonical_partner(n: usize, a: usize, b: usize) -> Option<(usize, usize)> {
    if n == 0 || !is_coprime(a, n) {
        return None;
    }
    let inv = mod_inverse(a, n)?;
    Some((1, (b % n) * inv % n))
}
