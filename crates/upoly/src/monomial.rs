// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Single terms `c * x^d`.

use crate::ring::IntegerRing;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;

/// A single term `coefficient * x^degree`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monomial {
    pub degree: usize,
    pub coefficient: BigInt,
}

impl Monomial {
    /// Creates a monomial with the coefficient normalized into `ring`.
    pub fn new(ring: &IntegerRing, degree: usize, coefficient: &BigInt) -> Self {
        Self {
            degree,
            coefficient: ring.normalize(coefficient),
        }
    }

    /// Creates a monomial from a machine integer coefficient.
    pub fn from_int(ring: &IntegerRing, degree: usize, coefficient: i64) -> Self {
        Self::new(ring, degree, &BigInt::from(coefficient))
    }

    /// The monomial `x^degree`.
    pub fn power(degree: usize) -> Self {
        Self {
            degree,
            coefficient: BigInt::one(),
        }
    }

    /// A zero monomial is `0 * x^0`; any other degree with a zero coefficient is
    /// still a meaningful shift.
    pub fn is_trivial(&self) -> bool {
        self.degree == 0 && self.coefficient.is_zero()
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degree {
            0 => write!(f, "{}", self.coefficient),
            1 => write!(f, "{}*x", self.coefficient),
            d => write!(f, "{}*x^{d}", self.coefficient),
        }
    }
}
