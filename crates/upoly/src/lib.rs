// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Univariate Polynomial Kernel
//!
//! Dense univariate polynomial arithmetic with big integer coefficients, over
//! the integers `Z` or a modular ring `Z mod m`.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation.
//! - Fixed-capacity dense buffers ([`DensePolynomial`]) that are mutated in place and never
//!   reallocate.
//! - Scalar scaling, scaled combination with monomial shifts and dense products.
//! - Exact division and pseudo-division through a single engine ([`div_general`]).
//! - Integer-preserving reduction over `Z` ([`reduce_integer_preserving`]).
//! - Formal derivative, content and primitive part.
//! - A sparse [`Polynomial`] type for storage and exchange, backed by the dense engine.
//!
//! ## Coefficient Rings
//!
//! Modular coefficients are kept in the centered representation: for modulus `m` every
//! coefficient lies in `[-(m-1)/2, (m-1)/2]` when `m` is odd and in `[-m/2, m/2 - 1]` when
//! `m` is even.

pub mod dense;
pub mod errors;
pub mod monomial;
pub mod polynomial;
pub mod ring;
pub mod utils;

pub use dense::{div_general, reduce_integer_preserving, DensePolynomial, DivisionMode};
pub use errors::{PolynomialError, PolynomialResult, RingError};
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use ring::IntegerRing;
