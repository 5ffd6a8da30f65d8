// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use super::DensePolynomial;
use crate::errors::PolynomialResult;
use crate::ring::IntegerRing;
use num_traits::Zero;

impl DensePolynomial {
    /// Writes the formal derivative of `self` into `target`.
    ///
    /// Over `Z mod p` the derivative may lose more than one degree, or vanish
    /// entirely, when `p` divides an exponent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`](crate::PolynomialError::CapacityExceeded)
    /// unless `target.capacity() >= degree(self)`. `target` is untouched on error.
    pub fn derivative_into(
        &self,
        ring: &IntegerRing,
        target: &mut DensePolynomial,
    ) -> PolynomialResult<()> {
        let degree = self.degree();
        if degree > 0 {
            target.ensure_fits(degree - 1)?;
        }
        target.clear();
        if degree == 0 {
            return Ok(());
        }

        for (i, coefficient) in self.coefficients().iter().enumerate().skip(1) {
            if !coefficient.is_zero() {
                target.coefficients[i - 1] = ring.mul_int(coefficient, i as i64);
            }
        }
        target.touch(degree - 1)?;
        target.normalize(ring);
        Ok(())
    }
}
