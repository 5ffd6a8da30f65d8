// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial and ring operations.
//!
//! Almost every failure here is a caller contract violation (an undersized
//! buffer, a zero scalar, an inexact division). They are reported as values so
//! that upstream remainder-sequence code can surface them instead of aborting.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, PartialEq)]
pub enum PolynomialError {
    /// A dense buffer was requested with no coefficient slots.
    #[error("Dense polynomial capacity must be at least 1")]
    InvalidCapacity,

    /// An operation would write a coefficient at or beyond the buffer capacity.
    #[error("Degree {degree} does not fit in a dense polynomial of capacity {capacity}")]
    CapacityExceeded { degree: usize, capacity: usize },

    /// Scaling or dividing by the zero element of the ring.
    #[error("Scalar must be non-zero in the coefficient ring")]
    ZeroScalar,

    /// A shift monomial of degree 0 with a zero coefficient.
    #[error("Monomial multiplier must have positive degree or a non-zero coefficient")]
    InvalidMonomial,

    /// Exact division hit a coefficient the divisor's leading coefficient does not divide.
    #[error("Inexact division: {divisor} does not divide {coefficient}")]
    InexactDivision {
        coefficient: BigInt,
        divisor: BigInt,
    },

    /// The divisor has a larger degree than the dividend.
    #[error("Divisor degree {divisor} exceeds dividend degree {dividend}")]
    DegreeMismatch { dividend: usize, divisor: usize },

    /// Division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Operands live in different coefficient rings.
    #[error("Ring mismatch: {left} vs {right}")]
    RingMismatch { left: String, right: String },

    /// Invalid polynomial (e.g., empty coefficients)
    #[error("Invalid polynomial: {message}")]
    InvalidPolynomial { message: String },

    /// Ring construction error
    #[error(transparent)]
    Ring(#[from] RingError),
}

/// Errors raised while constructing an integer ring descriptor.
#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    /// Invalid modulus for a modular ring
    #[error("Invalid modulus: {modulus} - {reason}")]
    InvalidModulus { modulus: BigInt, reason: String },

    /// A modulus flagged as prime failed the primality check.
    #[error("Modulus {modulus} was declared prime but is composite")]
    NotPrime { modulus: BigInt },
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;

impl PolynomialError {
    /// Create a capacity error for a write at `degree` into a buffer of `capacity` slots.
    pub(crate) fn capacity(degree: usize, capacity: usize) -> Self {
        PolynomialError::CapacityExceeded { degree, capacity }
    }

    /// Create an invalid polynomial error with a message
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PolynomialError::InvalidPolynomial {
            message: message.into(),
        }
    }
}
