//! Primality checks over small integers.

use std::collections::BTreeMap;

/// Whether `n` is prime. Trial division up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Map each number in `1..=limit` to whether it is prime.
pub fn prime_flags(limit: u64) -> BTreeMap<u64, bool> {
    (1..=limit).map(|n| (n, is_prime(n))).collect()
}

// ── tests ────────────────────────────────────────────────────────────
