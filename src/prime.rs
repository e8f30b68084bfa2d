//! Primality helpers used to pick bucket-array lengths.
//!
//! Both map variants keep their capacity prime, both at construction and after every
//! rebuild, since a prime modulus spreads quadratic probe sequences over half the
//! table and keeps chains short for weak hash functions.

use crate::TableError;

/// Returns `true` if `n` is prime.
///
/// Trial division by odd factors up to `√n`.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub const fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n <= 1 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    // `factor <= n / factor` is `factor² <= n` without the overflow
    while factor <= n / factor {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }

    true
}

/// Returns the smallest prime greater than or equal to `max(n, 2)`.
///
/// Returns `None` if no such prime is representable as a `usize`.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub const fn next_prime(n: usize) -> Option<usize> {
    if n <= 2 {
        return Some(2);
    }

    let mut candidate = if n % 2 == 0 {
        match n.checked_add(1) {
            Some(odd) => odd,
            None => return None,
        }
    } else {
        n
    };

    while !is_prime(candidate) {
        candidate = match candidate.checked_add(2) {
            Some(next) => next,
            None => return None,
        };
    }

    Some(candidate)
}

/// Coerces a requested capacity into a valid prime bucket count.
pub(crate) fn prime_capacity(requested: usize) -> Result<usize, TableError> {
    next_prime(requested).ok_or(TableError::CapacityOverflow { requested })
}

/// Capacity to grow to once a table crosses its load threshold: the next prime after
/// twice the current capacity.
pub(crate) fn grown_capacity(current: usize) -> Result<usize, TableError> {
    current
        .checked_mul(2)
        .ok_or(TableError::CapacityOverflow { requested: current })
        .and_then(prime_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let primes: Vec<usize> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn test_squares_of_primes_are_composite() {
        for p in [3usize, 5, 7, 11, 101, 65_521] {
            assert!(!is_prime(p * p), "{} should be composite", p * p);
        }
    }

    #[test]
    fn test_next_prime_rounds_up() {
        assert_eq!(next_prime(0), Some(2));
        assert_eq!(next_prime(1), Some(2));
        assert_eq!(next_prime(2), Some(2));
        assert_eq!(next_prime(4), Some(5));
        assert_eq!(next_prime(10), Some(11));
        assert_eq!(next_prime(11), Some(11));
        assert_eq!(next_prime(22), Some(23));
        assert_eq!(next_prime(24), Some(29));
    }

    #[test]
    fn test_next_prime_overflow() {
        assert_eq!(next_prime(usize::MAX), None);
        assert_eq!(prime_capacity(usize::MAX), Err(TableError::CapacityOverflow { requested: usize::MAX }));
    }

    #[test]
    fn test_growth_doubles_then_rounds() {
        assert_eq!(grown_capacity(11), Ok(23));
        assert_eq!(grown_capacity(23), Ok(47));
        assert_eq!(grown_capacity(2), Ok(5));
        assert!(grown_capacity(usize::MAX).is_err());
    }
}
