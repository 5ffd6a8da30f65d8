// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer ring descriptors.
//!
//! Every coefficient operation in this crate is parameterized by an
//! [`IntegerRing`]: either the unrestricted integers `Z`, or the integers
//! modulo `m` (optionally flagged prime). Elements of `Z mod m` are kept in the
//! symmetric representation produced by [`reduce_and_center`].

use crate::errors::{PolynomialError, PolynomialResult, RingError};
use crate::utils::{self, mod_inverse, reduce, reduce_and_center};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
enum RingKind {
    Integers,
    Modular {
        modulus: BigInt,
        half_modulus: BigInt,
        is_prime: bool,
    },
}

/// A coefficient ring: `Z` or `Z mod m`.
///
/// The descriptor is read-only once built and cheap to share between
/// independent computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerRing {
    kind: RingKind,
}

impl Default for IntegerRing {
    fn default() -> Self {
        Self::integers()
    }
}

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RingKind::Integers => write!(f, "Z"),
            RingKind::Modular {
                modulus, is_prime, ..
            } => {
                write!(f, "Z mod {modulus}")?;
                if *is_prime {
                    write!(f, " (prime)")?;
                }
                Ok(())
            }
        }
    }
}

impl IntegerRing {
    /// The ring of all integers.
    pub fn integers() -> Self {
        Self {
            kind: RingKind::Integers,
        }
    }

    /// The ring of integers modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidModulus`] if `modulus < 2`, and
    /// [`RingError::NotPrime`] if `is_prime` is claimed for a modulus that fits
    /// in a `u64` and is composite.
    pub fn modular(modulus: impl Into<BigInt>, is_prime: bool) -> Result<Self, RingError> {
        let modulus = modulus.into();
        if modulus < BigInt::from(2) {
            return Err(RingError::InvalidModulus {
                modulus,
                reason: "modulus must be at least 2".to_string(),
            });
        }
        if is_prime {
            if let Some(small) = modulus.to_u64() {
                if !utils::is_prime(small) {
                    return Err(RingError::NotPrime { modulus });
                }
            }
        }

        debug!(modulus = %modulus, is_prime, "constructed modular integer ring");

        let half_modulus = &modulus / 2;
        Ok(Self {
            kind: RingKind::Modular {
                modulus,
                half_modulus,
                is_prime,
            },
        })
    }

    /// Returns `true` for the unrestricted integers.
    pub fn is_integers(&self) -> bool {
        matches!(self.kind, RingKind::Integers)
    }

    /// Returns the modulus, or `None` for `Z`.
    pub fn modulus(&self) -> Option<&BigInt> {
        match &self.kind {
            RingKind::Integers => None,
            RingKind::Modular { modulus, .. } => Some(modulus),
        }
    }

    /// Returns `true` when the ring was built with a prime modulus.
    pub fn is_prime(&self) -> bool {
        matches!(self.kind, RingKind::Modular { is_prime: true, .. })
    }

    /// Checks whether `x` is already in the ring's canonical representation.
    pub fn contains(&self, x: &BigInt) -> bool {
        match &self.kind {
            RingKind::Integers => true,
            RingKind::Modular {
                modulus,
                half_modulus,
                ..
            } => {
                let lower = -half_modulus;
                if modulus.is_odd() {
                    *x >= lower && x <= half_modulus
                } else {
                    *x >= lower && *x < *half_modulus
                }
            }
        }
    }

    /// Maps an arbitrary integer to its canonical representative.
    pub fn normalize(&self, x: &BigInt) -> BigInt {
        match &self.kind {
            RingKind::Integers => x.clone(),
            RingKind::Modular {
                modulus,
                half_modulus,
                ..
            } => reduce_and_center(x, modulus, half_modulus),
        }
    }

    /// Normalizes `x` in place, skipping the work when it is already canonical.
    pub fn normalize_mut(&self, x: &mut BigInt) {
        if !self.contains(x) {
            *x = self.normalize(x);
        }
    }

    /// Sign of `x` as an element of the ring: -1, 0 or 1.
    pub fn sign(&self, x: &BigInt) -> i32 {
        let sign_of = |v: &BigInt| {
            if v.is_zero() {
                0
            } else if v.is_negative() {
                -1
            } else {
                1
            }
        };
        if self.contains(x) {
            sign_of(x)
        } else {
            sign_of(&self.normalize(x))
        }
    }

    /// Returns `true` if `x` is the zero of the ring.
    pub fn is_zero(&self, x: &BigInt) -> bool {
        self.sign(x) == 0
    }

    /// Compares the canonical representatives of `a` and `b`.
    pub fn cmp(&self, a: &BigInt, b: &BigInt) -> Ordering {
        self.normalize(a).cmp(&self.normalize(b))
    }

    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a + b))
    }

    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a - b))
    }

    pub fn neg(&self, a: &BigInt) -> BigInt {
        self.normalize(&-a)
    }

    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(&(a * b))
    }

    /// Multiplies by a machine integer.
    pub fn mul_int(&self, a: &BigInt, c: i64) -> BigInt {
        self.normalize(&(a * c))
    }

    /// `acc += a * b`
    pub fn add_mul(&self, acc: &mut BigInt, a: &BigInt, b: &BigInt) {
        *acc += a * b;
        self.normalize_mut(acc);
    }

    /// `acc += a * c` for a machine integer `c`.
    pub fn add_mul_int(&self, acc: &mut BigInt, a: &BigInt, c: i64) {
        *acc += a * c;
        self.normalize_mut(acc);
    }

    /// `acc -= a * b`
    pub fn sub_mul(&self, acc: &mut BigInt, a: &BigInt, b: &BigInt) {
        *acc -= a * b;
        self.normalize_mut(acc);
    }

    /// Computes `a^n` in the ring.
    pub fn pow(&self, a: &BigInt, n: usize) -> BigInt {
        match &self.kind {
            RingKind::Integers => num_traits::pow(a.clone(), n),
            RingKind::Modular { modulus, .. } => {
                let base = reduce(a, modulus);
                self.normalize(&base.modpow(&BigInt::from(n), modulus))
            }
        }
    }

    /// Returns `true` if `a` divides `b` in the ring.
    ///
    /// Over `Z mod m`, `a` divides `b` exactly when `gcd(a, m)` divides `b`.
    pub fn divides(&self, a: &BigInt, b: &BigInt) -> bool {
        if self.is_zero(a) {
            return false;
        }
        match &self.kind {
            RingKind::Integers => b.is_multiple_of(a),
            RingKind::Modular { modulus, .. } => {
                reduce(b, modulus).is_multiple_of(&reduce(a, modulus).gcd(modulus))
            }
        }
    }

    /// Exact division `a / b`.
    ///
    /// The caller guarantees that `b` divides `a`; this is only checked in
    /// debug builds. Over `Z mod m` with `g = gcd(b, m)` the result solves
    /// `(b / g) * x = a / g (mod m / g)`, so it is one of several valid
    /// quotients when `g > 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ZeroScalar`] if `b` is zero in the ring.
    pub fn div_exact(&self, a: &BigInt, b: &BigInt) -> PolynomialResult<BigInt> {
        if self.is_zero(b) {
            return Err(PolynomialError::ZeroScalar);
        }
        debug_assert!(self.divides(b, a), "{b} does not divide {a} in {self}");
        match &self.kind {
            RingKind::Integers => Ok(a / b),
            RingKind::Modular { modulus, .. } => {
                let a = reduce(a, modulus);
                let b = reduce(b, modulus);
                let g = b.gcd(modulus);
                let reduced_modulus = modulus / &g;
                let inverse = mod_inverse(&(&b / &g), &reduced_modulus)
                    .ok_or_else(|| PolynomialError::InexactDivision {
                        coefficient: a.clone(),
                        divisor: b.clone(),
                    })?;
                Ok(self.normalize(&((&a / &g) * inverse)))
            }
        }
    }

    /// Non-negative gcd of the representatives of `a` and `b`.
    pub fn gcd(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(a).gcd(&self.normalize(b))
    }

    /// Non-negative lcm of the representatives of `a` and `b`.
    pub fn lcm(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.normalize(a).lcm(&self.normalize(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_integers_are_unrestricted() {
        let z = IntegerRing::integers();
        assert!(z.is_integers());
        assert_eq!(z.modulus(), None);
        assert_eq!(z.add(&int(1_000_000), &int(1)), int(1_000_001));
        assert_eq!(z.sign(&int(-5)), -1);
        assert_eq!(z.to_string(), "Z");
    }

    #[test]
    fn test_modular_construction() {
        assert!(matches!(
            IntegerRing::modular(1, false),
            Err(RingError::InvalidModulus { .. })
        ));
        assert!(matches!(
            IntegerRing::modular(15, true),
            Err(RingError::NotPrime { .. })
        ));

        let z7 = IntegerRing::modular(7, true).unwrap();
        assert!(z7.is_prime());
        assert_eq!(z7.modulus(), Some(&int(7)));
        assert_eq!(z7.to_string(), "Z mod 7 (prime)");

        let z8 = IntegerRing::modular(8, false).unwrap();
        assert_eq!(z8.to_string(), "Z mod 8");
    }

    #[test]
    fn test_modular_arithmetic() {
        let z7 = IntegerRing::modular(7, true).unwrap();
        assert_eq!(z7.add(&int(3), &int(3)), int(-1));
        assert_eq!(z7.mul(&int(3), &int(5)), int(1));
        assert_eq!(z7.neg(&int(3)), int(-3));
        assert_eq!(z7.mul_int(&int(2), 4), int(1));
        assert_eq!(z7.pow(&int(3), 6), int(1));
        assert_eq!(z7.pow(&int(-2), 3), int(-1));
        assert!(z7.is_zero(&int(14)));
        assert_eq!(z7.sign(&int(6)), -1);

        let mut acc = int(2);
        z7.add_mul(&mut acc, &int(3), &int(2));
        assert_eq!(acc, int(1));
        z7.sub_mul(&mut acc, &int(3), &int(3));
        assert_eq!(acc, int(-1));
    }

    #[test]
    fn test_contains_matches_normalize() {
        for m in [2i64, 5, 8, 9] {
            let ring = IntegerRing::modular(m, false).unwrap();
            for v in -20i64..20 {
                let x = int(v);
                assert_eq!(ring.contains(&x), ring.normalize(&x) == x, "m = {m}, v = {v}");
            }
        }
    }

    #[test]
    fn test_divides_and_div_exact() {
        let z = IntegerRing::integers();
        assert!(z.divides(&int(2), &int(6)));
        assert!(!z.divides(&int(2), &int(1)));
        assert!(!z.divides(&int(0), &int(0)));
        assert_eq!(z.div_exact(&int(-6), &int(2)).unwrap(), int(-3));
        assert_eq!(z.div_exact(&int(1), &int(0)), Err(PolynomialError::ZeroScalar));

        let z7 = IntegerRing::modular(7, true).unwrap();
        assert!(z7.divides(&int(2), &int(1)));
        let q = z7.div_exact(&int(1), &int(2)).unwrap();
        assert_eq!(z7.mul(&q, &int(2)), int(1));

        let z8 = IntegerRing::modular(8, false).unwrap();
        assert!(z8.divides(&int(3), &int(1)));
        assert!(z8.divides(&int(2), &int(2)));
        assert!(!z8.divides(&int(2), &int(1)));
    }

    #[test]
    fn test_divides_by_zero_divisor_mod_composite() {
        let z10 = IntegerRing::modular(10, false).unwrap();
        // 4 * 3 = 12 = 2 (mod 10)
        assert!(z10.divides(&int(4), &int(2)));
        let q = z10.div_exact(&int(2), &int(4)).unwrap();
        assert_eq!(z10.mul(&q, &int(4)), int(2));
        assert!(!z10.divides(&int(4), &int(3)));
        assert!(!z10.divides(&int(5), &int(2)));

        let q = z10.div_exact(&int(-4), &int(6)).unwrap();
        assert_eq!(z10.mul(&q, &int(6)), z10.normalize(&int(-4)));

        for a in -5i64..5 {
            for b in -5i64..5 {
                let (a, b) = (int(a), int(b));
                if z10.divides(&b, &a) {
                    let q = z10.div_exact(&a, &b).unwrap();
                    assert_eq!(z10.mul(&q, &b), z10.normalize(&a), "a = {a}, b = {b}");
                }
            }
        }
    }

    #[test]
    fn test_gcd_lcm() {
        let z = IntegerRing::integers();
        assert_eq!(z.gcd(&int(-12), &int(18)), int(6));
        assert_eq!(z.lcm(&int(-4), &int(6)), int(12));
        assert_eq!(z.lcm(&int(1), &int(2)), int(2));
    }
}
