// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Modular helpers shared by the integer ring descriptor.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduces a number modulo a modulus and centers it.
///
/// After reduction the number lies in the symmetric range
/// `[-(m-1)/2, (m-1)/2]` for odd `m` and `[-m/2, m/2 - 1]` for even `m`.
///
/// # Arguments
///
/// * `x` - The number to reduce.
/// * `modulus` - The (positive) modulus.
/// * `half_modulus` - `modulus / 2`, precomputed by the caller.
pub fn reduce_and_center(x: &BigInt, modulus: &BigInt, half_modulus: &BigInt) -> BigInt {
    let mut r = reduce(x, modulus);

    if modulus.is_odd() {
        if r > *half_modulus {
            r -= modulus;
        }
    } else if r >= *half_modulus {
        r -= modulus;
    }

    r
}

/// Reduces a number modulo a modulus.
///
/// # Returns
///
/// The reduced number in the range [0, modulus)
pub fn reduce(x: &BigInt, modulus: &BigInt) -> BigInt {
    let mut r = x % modulus;
    if r < BigInt::zero() {
        r += modulus;
    }
    r
}

/// Computes the inverse of `a` modulo `modulus`.
///
/// Returns `None` when `gcd(a, modulus) != 1`. The result lies in `[0, modulus)`.
pub fn mod_inverse(a: &BigInt, modulus: &BigInt) -> Option<BigInt> {
    let a = reduce(a, modulus);
    let egcd = a.extended_gcd(modulus);
    if egcd.gcd.is_one() {
        Some(reduce(&egcd.x, modulus))
    } else {
        None
    }
}

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n), which is enough to validate a modulus
/// once when a ring is built.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_and_center() {
        let modulus = BigInt::from(7);
        let half_modulus = &modulus / 2;

        assert_eq!(
            reduce_and_center(&BigInt::from(10), &modulus, &half_modulus),
            BigInt::from(3)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(-3), &modulus, &half_modulus),
            BigInt::from(-3)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(6), &modulus, &half_modulus),
            BigInt::from(-1)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(-4), &modulus, &half_modulus),
            BigInt::from(3)
        );
    }

    #[test]
    fn test_reduce_and_center_even_modulus() {
        let modulus = BigInt::from(8);
        let half_modulus = &modulus / 2;

        assert_eq!(
            reduce_and_center(&BigInt::from(4), &modulus, &half_modulus),
            BigInt::from(-4)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(3), &modulus, &half_modulus),
            BigInt::from(3)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(-5), &modulus, &half_modulus),
            BigInt::from(3)
        );
    }

    #[test]
    fn test_reduce() {
        let modulus = BigInt::from(7);
        assert_eq!(reduce(&BigInt::from(-3), &modulus), BigInt::from(4));
        assert_eq!(reduce(&BigInt::from(-14), &modulus), BigInt::from(0));
        assert_eq!(reduce(&BigInt::from(-15), &modulus), BigInt::from(6));
        assert_eq!(reduce(&BigInt::from(50), &modulus), BigInt::from(1));
    }

    #[test]
    fn test_mod_inverse() {
        for q_val in [3i64, 5, 7, 11, 13] {
            let q = BigInt::from(q_val);
            for a_val in 1..q_val {
                let a = BigInt::from(a_val);
                let inv = mod_inverse(&a, &q).expect("inverse exists for prime modulus");
                assert_eq!(reduce(&(&a * &inv), &q), BigInt::one());
            }
        }

        assert_eq!(mod_inverse(&BigInt::from(-1), &BigInt::from(7)), Some(BigInt::from(6)));
        assert_eq!(mod_inverse(&BigInt::from(2), &BigInt::from(8)), None);
        assert_eq!(mod_inverse(&BigInt::from(0), &BigInt::from(5)), None);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(10007));
        assert!(is_prime(104729));
        assert!(!is_prime(104729 * 3));
    }
}
