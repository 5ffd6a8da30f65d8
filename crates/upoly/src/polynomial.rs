// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse univariate polynomials.
//!
//! [`Polynomial`] is the compact storage form handed around by callers. The
//! arithmetic in the second `impl` block follows one pattern: unpack the
//! operands into [`DensePolynomial`] buffers sized from their degrees, run the
//! dense engine in place, and pack the result back.

use crate::dense::{self, DensePolynomial, DivisionMode};
use crate::errors::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;
use crate::ring::IntegerRing;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::collections::BTreeMap;
use std::fmt;

/// A sparse polynomial: non-zero terms in strictly ascending degree.
///
/// The zero polynomial has no terms and degree 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    ring: IntegerRing,
    monomials: Vec<Monomial>,
}

/// Writes terms given in descending degree as `3x^2 - x + 2`.
pub(crate) fn fmt_descending<'a>(
    f: &mut fmt::Formatter<'_>,
    terms: impl Iterator<Item = (usize, &'a BigInt)>,
) -> fmt::Result {
    let mut first = true;
    for (degree, coeff) in terms {
        if coeff.is_zero() {
            continue;
        }

        if first {
            if coeff.is_negative() {
                write!(f, "-")?;
            }
        } else if coeff.is_negative() {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        first = false;

        let abs_coeff = coeff.abs();
        if degree == 0 || !abs_coeff.is_one() {
            write!(f, "{abs_coeff}")?;
        }

        if degree > 0 {
            write!(f, "x")?;
            if degree > 1 {
                write!(f, "^{degree}")?;
            }
        }
    }

    if first {
        write!(f, "0")?;
    }

    Ok(())
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_descending(
            f,
            self.monomials
                .iter()
                .rev()
                .map(|m| (m.degree, &m.coefficient)),
        )
    }
}

impl Polynomial {
    /// The zero polynomial over `ring`.
    pub fn zero(ring: &IntegerRing) -> Self {
        Self {
            ring: ring.clone(),
            monomials: Vec::new(),
        }
    }

    /// A constant polynomial.
    pub fn constant(ring: &IntegerRing, constant: &BigInt) -> Self {
        Self::from_monomials(ring, [Monomial::new(ring, 0, constant)])
    }

    /// Creates a polynomial from coefficients in ascending order of degree.
    ///
    /// Each coefficient is reduced into `ring`; zero terms are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidPolynomial`] for an empty slice.
    pub fn from_coefficients(
        ring: &IntegerRing,
        coefficients: &[BigInt],
    ) -> PolynomialResult<Self> {
        if coefficients.is_empty() {
            return Err(PolynomialError::invalid("coefficient list is empty"));
        }
        Ok(Self::from_dense_slice(ring, coefficients))
    }

    /// Creates a polynomial from machine integer coefficients in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidPolynomial`] for an empty slice.
    pub fn from_ints(ring: &IntegerRing, coefficients: &[i64]) -> PolynomialResult<Self> {
        let coefficients: Vec<BigInt> = coefficients.iter().map(|&c| BigInt::from(c)).collect();
        Self::from_coefficients(ring, &coefficients)
    }

    pub(crate) fn from_dense_slice(ring: &IntegerRing, coefficients: &[BigInt]) -> Self {
        let monomials = coefficients
            .iter()
            .enumerate()
            .map(|(degree, c)| Monomial::new(ring, degree, c))
            .filter(|m| !m.coefficient.is_zero())
            .collect();
        Self {
            ring: ring.clone(),
            monomials,
        }
    }

    /// Creates a polynomial from arbitrary terms, summing equal degrees.
    pub fn from_monomials(
        ring: &IntegerRing,
        monomials: impl IntoIterator<Item = Monomial>,
    ) -> Self {
        let mut terms: BTreeMap<usize, BigInt> = BTreeMap::new();
        for m in monomials {
            let entry = terms.entry(m.degree).or_default();
            *entry = ring.add(entry, &m.coefficient);
        }
        let monomials = terms
            .into_iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(degree, coefficient)| Monomial {
                degree,
                coefficient,
            })
            .collect();
        Self {
            ring: ring.clone(),
            monomials,
        }
    }

    pub fn ring(&self) -> &IntegerRing {
        &self.ring
    }

    /// The non-zero terms in ascending order of degree.
    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of a zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.monomials.last().map_or(0, |m| m.degree)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    pub fn lead_coefficient(&self) -> Option<&BigInt> {
        self.monomials.last().map(|m| &m.coefficient)
    }

    /// All coefficients in ascending order, `degree + 1` of them.
    pub fn to_coefficients(&self) -> Vec<BigInt> {
        let mut coefficients = vec![BigInt::zero(); self.degree() + 1];
        for m in &self.monomials {
            coefficients[m.degree] = m.coefficient.clone();
        }
        coefficients
    }

    /// Writes the coefficients into an exponent-indexed slice.
    ///
    /// Slots `0..=degree` are overwritten; slots above the degree are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] if the slice has fewer than
    /// `degree + 1` slots.
    pub fn unpack(&self, out: &mut [BigInt]) -> PolynomialResult<()> {
        let degree = self.degree();
        if out.len() <= degree {
            return Err(PolynomialError::capacity(degree, out.len()));
        }
        for slot in out[..=degree].iter_mut() {
            slot.set_zero();
        }
        for m in &self.monomials {
            out[m.degree] = m.coefficient.clone();
        }
        Ok(())
    }

    fn check_ring(&self, other: &Self) -> PolynomialResult<()> {
        if self.ring != other.ring {
            return Err(PolynomialError::RingMismatch {
                left: self.ring.to_string(),
                right: other.ring.to_string(),
            });
        }
        Ok(())
    }

    fn to_dense(&self, capacity: usize) -> PolynomialResult<DensePolynomial> {
        DensePolynomial::from_sparse(capacity, self)
    }
}

impl Polynomial {
    /// Adds two polynomials over the same ring.
    pub fn add(&self, other: &Self) -> PolynomialResult<Self> {
        self.check_ring(other)?;
        if other.is_zero() {
            return Ok(self.clone());
        }
        let mut sum = self.to_dense(self.degree().max(other.degree()) + 1)?;
        sum.add_scaled_int(other, 1)?;
        Ok(sum.to_sparse(&self.ring))
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> PolynomialResult<Self> {
        self.check_ring(other)?;
        if other.is_zero() {
            return Ok(self.clone());
        }
        let mut difference = self.to_dense(self.degree().max(other.degree()) + 1)?;
        difference.add_scaled_int(other, -1)?;
        Ok(difference.to_sparse(&self.ring))
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Self {
            ring: self.ring.clone(),
            monomials: self
                .monomials
                .iter()
                .map(|m| Monomial {
                    degree: m.degree,
                    coefficient: self.ring.neg(&m.coefficient),
                })
                .filter(|m| !m.coefficient.is_zero())
                .collect(),
        }
    }

    /// Multiplies two polynomials.
    ///
    /// The product is accumulated with [`DensePolynomial::sub_product`] into a
    /// zeroed buffer of `deg(self) + deg(other) + 1` slots and negated.
    pub fn mul(&self, other: &Self) -> PolynomialResult<Self> {
        self.check_ring(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(&self.ring));
        }
        let p = self.to_dense(self.degree() + 1)?;
        let q = other.to_dense(other.degree() + 1)?;
        let mut product = DensePolynomial::with_degree_bound(self.degree() + other.degree());
        product.sub_product(&self.ring, &p, &q)?;
        product.negate(&self.ring);
        Ok(product.to_sparse(&self.ring))
    }

    /// Adds `multiplier * other` to `self`, where `multiplier` is a single term.
    pub fn add_monomial_multiple(
        &self,
        other: &Self,
        multiplier: &Monomial,
    ) -> PolynomialResult<Self> {
        self.check_ring(other)?;
        let degree = self.degree().max(other.degree() + multiplier.degree);
        let mut sum = self.to_dense(degree + 1)?;
        sum.add_scaled_monomial(other, multiplier)?;
        Ok(sum.to_sparse(&self.ring))
    }

    fn divide(&self, divisor: &Self, mode: DivisionMode) -> PolynomialResult<(Self, Self)> {
        self.check_ring(divisor)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(&self.ring), self.clone()));
        }
        let p = self.to_dense(self.degree() + 1)?;
        let q = divisor.to_dense(divisor.degree() + 1)?;
        let mut quotient = DensePolynomial::with_degree_bound(self.degree() - divisor.degree());
        let mut remainder = DensePolynomial::with_degree_bound(self.degree());
        dense::div_general(&self.ring, mode, &p, &q, &mut quotient, &mut remainder)?;
        Ok((quotient.to_sparse(&self.ring), remainder.to_sparse(&self.ring)))
    }

    /// Exact division, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InexactDivision`] when the divisor's leading
    /// coefficient fails to divide a coefficient met during elimination.
    pub fn div_exact(&self, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        self.divide(divisor, DivisionMode::Exact)
    }

    /// Pseudo-division, returning `(quotient, remainder)` with
    /// `lc(divisor)^(deg(self) - deg(divisor) + 1) * self = quotient * divisor + remainder`.
    pub fn pseudo_div(&self, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        self.divide(divisor, DivisionMode::Pseudo)
    }

    /// Integer-preserving reduction over `Z`, returning `(multiplier, reduced)`
    /// such that `multiplier * self - reduced` is a multiple of `divisor`.
    pub fn reduce(&self, divisor: &Self) -> PolynomialResult<(BigInt, Self)> {
        self.check_ring(divisor)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.degree() < divisor.degree() {
            return Ok((BigInt::one(), self.clone()));
        }
        let p = self.to_dense(self.degree() + 1)?;
        let q = divisor.to_dense(divisor.degree() + 1)?;
        let mut reduced = DensePolynomial::with_degree_bound(self.degree());
        let multiplier = dense::reduce_integer_preserving(&p, &q, &mut reduced)?;
        Ok((multiplier, reduced.to_sparse(&self.ring)))
    }

    /// The formal derivative.
    pub fn derivative(&self) -> PolynomialResult<Self> {
        let p = self.to_dense(self.degree() + 1)?;
        let mut derivative = DensePolynomial::with_degree_bound(self.degree().saturating_sub(1));
        p.derivative_into(&self.ring, &mut derivative)?;
        Ok(derivative.to_sparse(&self.ring))
    }

    /// Non-negative gcd of the coefficients.
    pub fn content(&self) -> BigInt {
        self.monomials
            .iter()
            .fold(BigInt::zero(), |gcd, m| num_integer::Integer::gcd(&gcd, &m.coefficient))
    }

    /// Divides out the content, leaving a positive leading coefficient.
    pub fn primitive_part(&self) -> PolynomialResult<Self> {
        let mut p = self.to_dense(self.degree() + 1)?;
        p.make_primitive(true);
        Ok(p.to_sparse(&self.ring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(values: &[i64]) -> Polynomial {
        Polynomial::from_ints(&IntegerRing::integers(), values).unwrap()
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let p = poly(&[1, 0, 3]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.monomials().len(), 2);
        assert_eq!(p.lead_coefficient(), Some(&BigInt::from(3)));
        assert_eq!(p.to_coefficients(), vec![BigInt::from(1), BigInt::from(0), BigInt::from(3)]);
    }

    #[test]
    fn test_zero_polynomial() {
        let zero = poly(&[0, 0]);
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), 0);
        assert_eq!(zero.lead_coefficient(), None);
        assert_eq!(zero.to_coefficients(), vec![BigInt::zero()]);
        assert_eq!(zero, Polynomial::zero(&IntegerRing::integers()));
        assert!(matches!(
            Polynomial::from_ints(&IntegerRing::integers(), &[]),
            Err(PolynomialError::InvalidPolynomial { .. })
        ));
    }

    #[test]
    fn test_polynomial_display() {
        assert_eq!(poly(&[1, -3, 2]).to_string(), "2x^2 - 3x + 1");
        assert_eq!(poly(&[-1, 0, 0, -1]).to_string(), "-x^3 - 1");
        assert_eq!(poly(&[0, 1]).to_string(), "x");
        assert_eq!(poly(&[0]).to_string(), "0");
    }

    #[test]
    fn test_from_monomials_merges_terms() {
        let z = IntegerRing::integers();
        let p = Polynomial::from_monomials(
            &z,
            [
                Monomial::from_int(&z, 2, 3),
                Monomial::from_int(&z, 0, 1),
                Monomial::from_int(&z, 2, -3),
                Monomial::from_int(&z, 1, 4),
            ],
        );
        assert_eq!(p, poly(&[1, 4]));
    }

    #[test]
    fn test_unpack() {
        let p = poly(&[5, 0, 7]);
        let mut out = vec![BigInt::from(9); 4];
        p.unpack(&mut out).unwrap();
        assert_eq!(out, vec![BigInt::from(5), BigInt::zero(), BigInt::from(7), BigInt::from(9)]);

        let mut short = vec![BigInt::zero(); 2];
        assert!(matches!(
            p.unpack(&mut short),
            Err(PolynomialError::CapacityExceeded { degree: 2, capacity: 2 })
        ));
    }

    #[test]
    fn test_polynomial_addition_and_subtraction() {
        let p = poly(&[1, 2]);
        let q = poly(&[3, 4, 5]);
        assert_eq!(p.add(&q).unwrap(), poly(&[4, 6, 5]));
        assert_eq!(q.sub(&q).unwrap(), poly(&[0]));
        assert_eq!(q.sub(&p).unwrap(), poly(&[2, 2, 5]));
        assert_eq!(p.neg(), poly(&[-1, -2]));
    }

    #[test]
    fn test_polynomial_multiplication() {
        let p = poly(&[2, 1]); // x + 2
        let q = poly(&[3, 1]); // x + 3
        assert_eq!(p.mul(&q).unwrap(), poly(&[6, 5, 1]));
        assert!(p.mul(&poly(&[0])).unwrap().is_zero());
    }

    #[test]
    fn test_add_monomial_multiple() {
        let p = poly(&[1]);
        let q = poly(&[1, 1]);
        let m = Monomial::from_int(&IntegerRing::integers(), 2, 3);
        assert_eq!(p.add_monomial_multiple(&q, &m).unwrap(), poly(&[1, 0, 3, 3]));
    }

    #[test]
    fn test_ring_mismatch() {
        let z5 = IntegerRing::modular(5, true).unwrap();
        let p = poly(&[1, 1]);
        let q = Polynomial::from_ints(&z5, &[1, 1]).unwrap();
        assert!(matches!(p.add(&q), Err(PolynomialError::RingMismatch { .. })));
    }

    #[test]
    fn test_modular_multiplication() {
        let z5 = IntegerRing::modular(5, true).unwrap();
        let p = Polynomial::from_ints(&z5, &[1, 1]).unwrap();
        let q = Polynomial::from_ints(&z5, &[-1, 1]).unwrap();
        // (x + 1)(x - 1) = x^2 - 1
        assert_eq!(p.mul(&q).unwrap(), Polynomial::from_ints(&z5, &[-1, 0, 1]).unwrap());
        // (x + 1)^5 = x^5 + 1 over Z mod 5
        let mut power = p.clone();
        for _ in 0..4 {
            power = power.mul(&p).unwrap();
        }
        assert_eq!(power, Polynomial::from_ints(&z5, &[1, 0, 0, 0, 0, 1]).unwrap());
    }

    #[test]
    fn test_polynomial_division() {
        let dividend = poly(&[6, 5, 1]); // x^2 + 5x + 6
        let divisor = poly(&[2, 1]); // x + 2
        let (quotient, remainder) = dividend.div_exact(&divisor).unwrap();
        assert_eq!(quotient, poly(&[3, 1]));
        assert!(remainder.is_zero());
    }

    #[test]
    fn test_division_by_zero() {
        let p = poly(&[1, 2]);
        assert!(matches!(
            p.div_exact(&poly(&[0])),
            Err(PolynomialError::DivisionByZero)
        ));
        assert!(matches!(p.reduce(&poly(&[0])), Err(PolynomialError::DivisionByZero)));
    }

    #[test]
    fn test_division_with_smaller_dividend() {
        let p = poly(&[1, 2]);
        let q = poly(&[1, 0, 1]);
        let (quotient, remainder) = p.pseudo_div(&q).unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, p);
        assert_eq!(p.reduce(&q).unwrap(), (BigInt::one(), p.clone()));
    }

    #[test]
    fn test_derivative_content_primitive() {
        assert_eq!(poly(&[5, 0, 3]).derivative().unwrap(), poly(&[0, 6]));
        assert!(poly(&[7]).derivative().unwrap().is_zero());

        let p = poly(&[-4, 0, -6]);
        assert_eq!(p.content(), BigInt::from(2));
        assert_eq!(p.primitive_part().unwrap(), poly(&[2, 0, 3]));
    }
}
