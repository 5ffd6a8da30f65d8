// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Scaled combinations `target += multiplier * shifted(source)`.
//!
//! All of these accumulate directly into the pre-sized target. Capacity is
//! checked before the first write, so a failed call leaves the target as it
//! was.

use super::DensePolynomial;
use crate::errors::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::ring::IntegerRing;
use num_bigint::BigInt;
use num_traits::Zero;

impl DensePolynomial {
    /// Raises `size` to cover `degree` after an accumulation, then renormalizes.
    fn settle(&mut self, ring: &IntegerRing, degree: usize) {
        if degree >= self.size {
            self.size = degree + 1;
        }
        self.normalize(ring);
    }

    /// `self += c * source`, over the ring of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::ZeroScalar`] for a zero `c` and
    /// [`PolynomialError::CapacityExceeded`] if `degree(source)` does not fit.
    pub fn add_scaled(&mut self, source: &Polynomial, c: &BigInt) -> PolynomialResult<()> {
        let ring = source.ring();
        if ring.is_zero(c) {
            return Err(PolynomialError::ZeroScalar);
        }
        let needed_degree = source.degree();
        self.ensure_fits(needed_degree)?;

        for m in source.monomials() {
            ring.add_mul(&mut self.coefficients[m.degree], &m.coefficient, c);
        }

        self.settle(ring, needed_degree);
        Ok(())
    }

    /// `self += c * source` for a machine integer `c`.
    ///
    /// # Errors
    ///
    /// Same as [`DensePolynomial::add_scaled`].
    pub fn add_scaled_int(&mut self, source: &Polynomial, c: i64) -> PolynomialResult<()> {
        let ring = source.ring();
        if ring.is_zero(&BigInt::from(c)) {
            return Err(PolynomialError::ZeroScalar);
        }
        let needed_degree = source.degree();
        self.ensure_fits(needed_degree)?;

        for m in source.monomials() {
            ring.add_mul_int(&mut self.coefficients[m.degree], &m.coefficient, c);
        }

        self.settle(ring, needed_degree);
        Ok(())
    }

    /// `self += m * source`, i.e. `self[d + m.degree] += a * m.coefficient` for
    /// every term `a * x^d` of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidMonomial`] for `0 * x^0` and
    /// [`PolynomialError::CapacityExceeded`] if `degree(source) + m.degree`
    /// does not fit.
    pub fn add_scaled_monomial(
        &mut self,
        source: &Polynomial,
        m: &Monomial,
    ) -> PolynomialResult<()> {
        if m.is_trivial() {
            return Err(PolynomialError::InvalidMonomial);
        }
        let ring = source.ring();
        let needed_degree = source.degree() + m.degree;
        self.ensure_fits(needed_degree)?;

        for term in source.monomials() {
            ring.add_mul(
                &mut self.coefficients[term.degree + m.degree],
                &term.coefficient,
                &m.coefficient,
            );
        }

        self.settle(ring, needed_degree);
        Ok(())
    }

    /// `self -= m * source` for a sparse `source`.
    ///
    /// # Errors
    ///
    /// Same as [`DensePolynomial::add_scaled_monomial`].
    pub fn sub_scaled_monomial(
        &mut self,
        source: &Polynomial,
        m: &Monomial,
    ) -> PolynomialResult<()> {
        if m.is_trivial() {
            return Err(PolynomialError::InvalidMonomial);
        }
        let ring = source.ring();
        let needed_degree = source.degree() + m.degree;
        self.ensure_fits(needed_degree)?;

        for term in source.monomials() {
            ring.sub_mul(
                &mut self.coefficients[term.degree + m.degree],
                &term.coefficient,
                &m.coefficient,
            );
        }

        self.settle(ring, needed_degree);
        Ok(())
    }

    /// `self -= m * source` for a dense `source`.
    ///
    /// This is the elimination step of division and reduction, where the
    /// source is itself a dense buffer.
    ///
    /// # Errors
    ///
    /// Same as [`DensePolynomial::add_scaled_monomial`].
    pub fn sub_dense_scaled_monomial(
        &mut self,
        ring: &IntegerRing,
        source: &DensePolynomial,
        m: &Monomial,
    ) -> PolynomialResult<()> {
        if m.is_trivial() {
            return Err(PolynomialError::InvalidMonomial);
        }
        if source.is_zero() {
            return Ok(());
        }
        let needed_degree = source.degree() + m.degree;
        self.ensure_fits(needed_degree)?;

        for (d, coefficient) in source.coefficients().iter().enumerate() {
            if !coefficient.is_zero() {
                ring.sub_mul(&mut self.coefficients[d + m.degree], coefficient, &m.coefficient);
            }
        }

        self.settle(ring, needed_degree);
        Ok(())
    }

    /// `self -= p * q`, the dense multiplication primitive.
    ///
    /// A zero operand leaves `self` unchanged. To compute a plain product,
    /// accumulate into a zeroed buffer and negate.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] unless
    /// `capacity > degree(p) + degree(q)`.
    pub fn sub_product(
        &mut self,
        ring: &IntegerRing,
        p: &DensePolynomial,
        q: &DensePolynomial,
    ) -> PolynomialResult<()> {
        if p.is_zero() || q.is_zero() {
            return Ok(());
        }
        let needed_degree = p.degree() + q.degree();
        self.ensure_fits(needed_degree)?;

        for (i, p_i) in p.coefficients().iter().enumerate() {
            if p_i.is_zero() {
                continue;
            }
            for (j, q_j) in q.coefficients().iter().enumerate() {
                if !q_j.is_zero() {
                    ring.sub_mul(&mut self.coefficients[i + j], p_i, q_j);
                }
            }
        }

        self.settle(ring, needed_degree);
        Ok(())
    }
}
