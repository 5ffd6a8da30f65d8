// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Scalar scaling and content extraction.

use super::DensePolynomial;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::ring::IntegerRing;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

impl DensePolynomial {
    /// Multiplies every coefficient by `c` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ZeroScalar`] if `c` is zero in `ring`.
    pub fn scale_multiply(&mut self, ring: &IntegerRing, c: &BigInt) -> PolynomialResult<()> {
        if ring.is_zero(c) {
            return Err(PolynomialError::ZeroScalar);
        }
        let size = self.size;
        for coefficient in self.coefficients[..size].iter_mut() {
            if !coefficient.is_zero() {
                *coefficient = ring.mul(coefficient, c);
            }
        }
        // Zero divisors in Z mod m can cancel the top coefficient.
        self.normalize(ring);
        Ok(())
    }

    /// Divides every coefficient by `c` in place.
    ///
    /// `c` must divide every coefficient exactly; this is only checked in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ZeroScalar`] if `c` is zero in `ring`.
    pub fn scale_divide_exact(&mut self, ring: &IntegerRing, c: &BigInt) -> PolynomialResult<()> {
        if ring.is_zero(c) {
            return Err(PolynomialError::ZeroScalar);
        }
        let size = self.size;
        for coefficient in self.coefficients[..size].iter_mut() {
            if !coefficient.is_zero() {
                *coefficient = ring.div_exact(coefficient, c)?;
            }
        }
        self.normalize(ring);
        Ok(())
    }

    /// Negates every coefficient in place.
    pub fn negate(&mut self, ring: &IntegerRing) {
        let size = self.size;
        for coefficient in self.coefficients[..size].iter_mut() {
            if !coefficient.is_zero() {
                *coefficient = ring.neg(coefficient);
            }
        }
        self.normalize(ring);
    }

    /// The content: non-negative gcd of the coefficients, zero for the zero
    /// polynomial.
    pub fn content(&self) -> BigInt {
        self.coefficients()
            .iter()
            .rev()
            .filter(|c| !c.is_zero())
            .fold(BigInt::zero(), |gcd, c| gcd.gcd(c))
    }

    /// Divides out the content over `Z`.
    ///
    /// With `positive` set, a negative leading coefficient is made positive by
    /// dividing by the negated content. The zero polynomial is left alone.
    pub fn make_primitive(&mut self, positive: bool) {
        if self.is_zero() {
            return;
        }

        let mut content = self.content();
        debug_assert!(content.is_positive());

        if positive && self.lead_coefficient().is_negative() {
            content = -content;
        }

        if !content.is_one() {
            let size = self.size;
            for coefficient in self.coefficients[..size].iter_mut() {
                if !coefficient.is_zero() {
                    *coefficient = &*coefficient / &content;
                }
            }
        }
    }
}
