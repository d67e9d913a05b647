//! Small number-theoretic helpers over Z/nZ.

/// Greatest common divisor, with `gcd(0, 0) == 0`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub fn is_coprime(a: usize, n: usize) -> bool {
    gcd(a, n) == 1
}

/// Distinct prime factors of `n` in ascending order (empty for 0 and 1).
pub fn prime_factors(n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    let mut rest = n;
    let mut p = 2;
    while p * p <= rest {
        if rest % p == 0 {
            factors.push(p);
            while rest % p == 0 {
                rest /= p;
            }
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

/// Inverse of `a` modulo `n`, or `None` when `gcd(a, n) != 1`.
pub fn mod_inverse(a: usize, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0);
    }
    // Extended Euclid on signed values
    let (mut old_r, mut r) = ((a % n) as i128, n as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(n as i128) as usize)
}
