// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense univariate polynomials with a fixed coefficient capacity.
//!
//! A [`DensePolynomial`] owns exactly `capacity` coefficient slots indexed by
//! exponent. Only the first `size` slots are significant; every slot at or
//! beyond `size` holds zero. The buffer never grows after construction, so the
//! in-place operations in this module never reallocate. Callers size buffers
//! from degree bounds up front (e.g. `deg(p) + deg(q) + 1` for a product) and
//! get [`PolynomialError::CapacityExceeded`] back, with the target untouched,
//! when they get it wrong.
//!
//! Invariant: `size >= 1` and either `size == 1` or the coefficient at
//! `size - 1` is non-zero.

mod combine;
mod derivative;
mod division;
mod reduction;
mod scale;

pub use division::{div_general, DivisionMode};
pub use reduction::reduce_integer_preserving;

use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::{fmt_descending, Polynomial};
use crate::ring::IntegerRing;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::fmt;

/// A dense polynomial `c_0 + c_1 x + ... + c_{size-1} x^{size-1}`.
#[derive(Clone, Debug)]
pub struct DensePolynomial {
    /// Number of significant slots.
    size: usize,
    /// Exactly `capacity` slots, index = exponent.
    coefficients: Vec<BigInt>,
}

impl PartialEq for DensePolynomial {
    /// Two dense polynomials are equal when their significant coefficients
    /// are, regardless of capacity.
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

impl Eq for DensePolynomial {}

impl fmt::Display for DensePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_descending(f, self.coefficients().iter().enumerate().rev())
    }
}

fn sign_of(x: &BigInt) -> i32 {
    match x.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl DensePolynomial {
    /// Creates the zero polynomial with room for `capacity` coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> PolynomialResult<Self> {
        if capacity == 0 {
            return Err(PolynomialError::InvalidCapacity);
        }
        Ok(Self {
            size: 1,
            coefficients: vec![BigInt::zero(); capacity],
        })
    }

    /// Creates the zero polynomial able to hold any polynomial of degree at
    /// most `degree`.
    pub fn with_degree_bound(degree: usize) -> Self {
        Self {
            size: 1,
            coefficients: vec![BigInt::zero(); degree + 1],
        }
    }

    /// Unpacks a sparse polynomial into a fresh buffer of `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] unless `capacity > degree(source)`.
    pub fn from_sparse(capacity: usize, source: &Polynomial) -> PolynomialResult<Self> {
        let degree = source.degree();
        if capacity <= degree {
            return Err(PolynomialError::capacity(degree, capacity));
        }
        let mut dense = Self::with_capacity(capacity)?;
        source.unpack(&mut dense.coefficients)?;
        dense.size = degree + 1;
        Ok(dense)
    }

    /// Builds a dense polynomial from ascending coefficients, reducing each one
    /// into `ring`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] if `coefficients` does not
    /// fit in `capacity` slots, and [`PolynomialError::InvalidCapacity`] for a
    /// zero capacity.
    pub fn from_coefficients(
        ring: &IntegerRing,
        capacity: usize,
        coefficients: &[BigInt],
    ) -> PolynomialResult<Self> {
        let mut dense = Self::with_capacity(capacity)?;
        if coefficients.len() > capacity {
            return Err(PolynomialError::capacity(coefficients.len() - 1, capacity));
        }
        for (slot, c) in dense.coefficients.iter_mut().zip(coefficients) {
            *slot = ring.normalize(c);
        }
        dense.size = coefficients.len().max(1);
        dense.normalize(ring);
        Ok(dense)
    }

    /// Total number of coefficient slots.
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of significant slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The degree; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.size - 1
    }

    /// The significant coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients[..self.size]
    }

    /// The coefficient of `x^degree`, or `None` past the significant part.
    pub fn coefficient(&self, degree: usize) -> Option<&BigInt> {
        self.coefficients().get(degree)
    }

    /// Checks that exponent `degree` has a slot.
    pub(crate) fn ensure_fits(&self, degree: usize) -> PolynomialResult<()> {
        if degree >= self.capacity() {
            return Err(PolynomialError::capacity(degree, self.capacity()));
        }
        Ok(())
    }

    /// Drops trailing ring-zero coefficients from the significant part.
    pub fn normalize(&mut self, ring: &IntegerRing) {
        while self.size > 1 && ring.is_zero(&self.coefficients[self.size - 1]) {
            self.coefficients[self.size - 1].set_zero();
            self.size -= 1;
        }
    }

    /// Copies the significant part of `source` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] if `source` does not fit.
    pub fn assign(&mut self, source: &Self) -> PolynomialResult<()> {
        self.ensure_fits(source.degree())?;
        self.coefficients[..source.size].clone_from_slice(source.coefficients());
        for slot in self.coefficients[source.size..self.size.max(source.size)].iter_mut() {
            slot.set_zero();
        }
        self.size = source.size;
        Ok(())
    }

    /// Exchanges capacity, size and storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Resets to the zero polynomial, keeping the capacity.
    pub fn clear(&mut self) {
        for slot in self.coefficients[..self.size].iter_mut() {
            slot.set_zero();
        }
        self.size = 1;
    }

    pub fn is_zero(&self) -> bool {
        self.size == 1 && self.coefficients[0].is_zero()
    }

    /// Marks `degree` as significant after a write at a new highest exponent.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::CapacityExceeded`] if `degree >= capacity`.
    pub fn touch(&mut self, degree: usize) -> PolynomialResult<()> {
        if degree >= self.size {
            self.ensure_fits(degree)?;
            self.size = degree + 1;
        }
        Ok(())
    }

    pub fn lead_coefficient(&self) -> &BigInt {
        &self.coefficients[self.size - 1]
    }

    pub fn sign_at_plus_infinity(&self) -> i32 {
        sign_of(self.lead_coefficient())
    }

    /// Even degree keeps the sign of the leading coefficient, odd degree flips it.
    pub fn sign_at_minus_infinity(&self) -> i32 {
        if self.is_zero() {
            return 0;
        }
        let lc_sign = self.sign_at_plus_infinity();
        if self.degree() % 2 == 0 {
            lc_sign
        } else {
            -lc_sign
        }
    }

    /// Evaluates at an integer point using Horner's method.
    pub fn evaluate_at(&self, x: &BigInt) -> BigInt {
        self.coefficients()
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    /// Sign of the value at an integer point.
    pub fn sign_at(&self, x: &BigInt) -> i32 {
        sign_of(&self.evaluate_at(x))
    }

    /// Packs the significant coefficients into a sparse polynomial over `ring`.
    pub fn to_sparse(&self, ring: &IntegerRing) -> Polynomial {
        Polynomial::from_dense_slice(ring, self.coefficients())
    }
}
