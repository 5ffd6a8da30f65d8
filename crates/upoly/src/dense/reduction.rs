// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer-preserving reduction of one polynomial by another over `Z`.

use super::DensePolynomial;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;
use crate::ring::IntegerRing;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// Reduces `dividend` by `divisor` over `Z` without leaving the integers.
///
/// Returns a multiplier `a` and fills `reduced` so that `a * dividend - reduced`
/// is an integer multiple of `divisor` and `reduced` has degree below
/// `degree(divisor)` (or is zero). Unlike pseudo-division the dividend is only
/// scaled when the divisor's leading coefficient fails to divide the
/// coefficient being eliminated, and then only by `lcm / coefficient`, which
/// keeps `a` small.
///
/// `reduced` needs `capacity > degree(dividend)`.
///
/// # Errors
///
/// - [`PolynomialError::DivisionByZero`] if `divisor` is zero.
/// - [`PolynomialError::DegreeMismatch`] if `degree(divisor) > degree(dividend)`.
/// - [`PolynomialError::CapacityExceeded`] if `reduced` is too small.
pub fn reduce_integer_preserving(
    dividend: &DensePolynomial,
    divisor: &DensePolynomial,
    reduced: &mut DensePolynomial,
) -> PolynomialResult<BigInt> {
    if divisor.is_zero() {
        return Err(PolynomialError::DivisionByZero);
    }
    let p_deg = dividend.degree();
    let q_deg = divisor.degree();
    if q_deg > p_deg {
        return Err(PolynomialError::DegreeMismatch {
            dividend: p_deg,
            divisor: q_deg,
        });
    }

    debug!(%dividend, %divisor, "reduce_integer_preserving");

    let z = IntegerRing::integers();
    let lc = divisor.lead_coefficient();
    let mut multiplier = BigInt::one();
    reduced.assign(dividend)?;

    for k in (q_deg..=p_deg).rev() {
        let coefficient = reduced.coefficients[k].clone();
        if coefficient.is_zero() {
            continue;
        }

        trace!(k, %reduced, "eliminating");

        let factor = if coefficient.is_multiple_of(lc) {
            &coefficient / lc
        } else {
            // red: a*x^k, divisor: b*x^d, so scale red by lcm/a and subtract lcm/b
            let lcm = coefficient.lcm(lc);
            let scale = &lcm / &coefficient;
            let factor = &lcm / lc;
            trace!(%lcm, %scale, %factor, "scaling");

            multiplier *= &scale;
            reduced.scale_multiply(&z, &scale)?;
            factor
        };

        let m = Monomial {
            degree: k - q_deg,
            coefficient: factor,
        };
        reduced.sub_dense_scaled_monomial(&z, divisor, &m)?;
    }

    debug!(%multiplier, %reduced, "reduce_integer_preserving done");
    Ok(multiplier)
}

impl DensePolynomial {
    /// [`reduce_integer_preserving`] into a freshly allocated buffer, returning
    /// `(multiplier, reduced)`.
    ///
    /// # Errors
    ///
    /// See [`reduce_integer_preserving`].
    pub fn reduce(&self, divisor: &Self) -> PolynomialResult<(BigInt, Self)> {
        let mut reduced = Self::with_degree_bound(self.degree());
        let multiplier = reduce_integer_preserving(self, divisor, &mut reduced)?;
        Ok((multiplier, reduced))
    }
}
