// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact division and pseudo-division of dense polynomials.

use super::DensePolynomial;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;
use crate::ring::IntegerRing;
use tracing::{debug, trace};

/// How [`div_general`] produces each quotient coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionMode {
    /// The divisor's leading coefficient must divide every coefficient it
    /// eliminates. Zero coefficients are skipped.
    Exact,
    /// Before each elimination the remainder is multiplied by the divisor's
    /// leading coefficient `b`. With `n = deg(dividend) - deg(divisor) + 1`
    /// the result satisfies `b^n * dividend = quotient * divisor + remainder`;
    /// the quotient coefficient of `x^j` is stored already multiplied by `b^j`.
    Pseudo,
}

/// Long division of `dividend` by `divisor` into caller-supplied buffers.
///
/// `remainder` ends with degree below `degree(divisor)` (or zero). In exact
/// mode `dividend = quotient * divisor + remainder`; in pseudo mode the
/// identity holds after scaling the dividend as described on
/// [`DivisionMode::Pseudo`].
///
/// `quotient` needs `capacity > degree(dividend) - degree(divisor)` and
/// `remainder` needs `capacity > degree(dividend)`.
///
/// # Errors
///
/// - [`PolynomialError::DivisionByZero`] if `divisor` is zero.
/// - [`PolynomialError::DegreeMismatch`] if `degree(divisor) > degree(dividend)`.
/// - [`PolynomialError::CapacityExceeded`] if a buffer is too small.
/// - [`PolynomialError::InexactDivision`] in exact mode when a coefficient is
///   not divisible by the divisor's leading coefficient. The buffers then hold
///   the partial state of the elimination.
pub fn div_general(
    ring: &IntegerRing,
    mode: DivisionMode,
    dividend: &DensePolynomial,
    divisor: &DensePolynomial,
    quotient: &mut DensePolynomial,
    remainder: &mut DensePolynomial,
) -> PolynomialResult<()> {
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
    quotient.ensure_fits(p_deg - q_deg)?;

    debug!(%ring, ?mode, %dividend, %divisor, "div_general");

    let lc = divisor.lead_coefficient();
    remainder.assign(dividend)?;
    quotient.clear();

    for k in (q_deg..=p_deg).rev() {
        let coefficient = remainder.coefficients[k].clone();
        if mode == DivisionMode::Exact && ring.is_zero(&coefficient) {
            continue;
        }

        trace!(k, %remainder, %quotient, "eliminating");

        let shift = k - q_deg;
        let factor = match mode {
            DivisionMode::Exact => {
                if !ring.divides(lc, &coefficient) {
                    return Err(PolynomialError::InexactDivision {
                        coefficient,
                        divisor: lc.clone(),
                    });
                }
                ring.div_exact(&coefficient, lc)?
            }
            DivisionMode::Pseudo => {
                // rem: a*x^k, divisor: b*x^d, so scale rem by b and subtract a*x^(k-d)*divisor
                remainder.scale_multiply(ring, lc)?;
                coefficient
            }
        };

        if ring.is_zero(&factor) {
            continue;
        }

        let m = Monomial {
            degree: shift,
            coefficient: factor,
        };
        remainder.sub_dense_scaled_monomial(ring, divisor, &m)?;

        quotient.coefficients[shift] = match mode {
            DivisionMode::Exact => m.coefficient,
            DivisionMode::Pseudo => ring.mul(&m.coefficient, &ring.pow(lc, shift)),
        };
        quotient.touch(shift)?;
    }
    quotient.normalize(ring);

    debug!(%quotient, %remainder, "div_general done");
    Ok(())
}

impl DensePolynomial {
    fn division_buffers(&self, divisor: &Self) -> (Self, Self) {
        let quotient_degree = self.degree().saturating_sub(divisor.degree());
        (
            Self::with_degree_bound(quotient_degree),
            Self::with_degree_bound(self.degree()),
        )
    }

    /// Exact division into freshly allocated `(quotient, remainder)` buffers.
    ///
    /// # Errors
    ///
    /// See [`div_general`].
    pub fn div_exact(&self, ring: &IntegerRing, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        let (mut quotient, mut remainder) = self.division_buffers(divisor);
        div_general(ring, DivisionMode::Exact, self, divisor, &mut quotient, &mut remainder)?;
        Ok((quotient, remainder))
    }

    /// Pseudo-division into freshly allocated `(quotient, remainder)` buffers.
    ///
    /// # Errors
    ///
    /// See [`div_general`].
    pub fn pseudo_div(&self, ring: &IntegerRing, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        let (mut quotient, mut remainder) = self.division_buffers(divisor);
        div_general(ring, DivisionMode::Pseudo, self, divisor, &mut quotient, &mut remainder)?;
        Ok((quotient, remainder))
    }
}
