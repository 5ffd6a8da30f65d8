// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use upoly::{div_general, DensePolynomial, DivisionMode, IntegerRing};

fn create_test_polynomials(
    ring: &IntegerRing,
    degree: usize,
) -> (DensePolynomial, DensePolynomial) {
    let mut coeffs1 = Vec::new();
    let mut coeffs2 = Vec::new();

    for i in 0..=degree {
        coeffs1.push(BigInt::from(i as i64 + 1));
        coeffs2.push(BigInt::from((i + 1) as i64 * 2 - 3));
    }

    (
        DensePolynomial::from_coefficients(ring, degree + 1, &coeffs1).unwrap(),
        DensePolynomial::from_coefficients(ring, degree + 1, &coeffs2).unwrap(),
    )
}

fn benchmark_dense_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_sub_product");
    let ring = IntegerRing::integers();

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(&ring, degree);
        let mut target = DensePolynomial::with_degree_bound(2 * degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| {
                target.clear();
                black_box(target.sub_product(&ring, &poly1, &poly2).unwrap())
            })
        });
    }

    group.finish();
}

fn benchmark_pseudo_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_division");
    let ring = IntegerRing::integers();

    for degree in [10, 20, 50, 100] {
        let (dividend, _) = create_test_polynomials(&ring, degree);
        let (_, divisor) = create_test_polynomials(&ring, degree / 2);
        let mut quotient = DensePolynomial::with_degree_bound(degree - degree / 2);
        let mut remainder = DensePolynomial::with_degree_bound(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| {
                black_box(
                    div_general(
                        &ring,
                        DivisionMode::Pseudo,
                        &dividend,
                        &divisor,
                        &mut quotient,
                        &mut remainder,
                    )
                    .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_modular_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_division_mod_prime");
    let ring = IntegerRing::modular(1000000007, true).unwrap();

    for degree in [10, 50, 100, 500] {
        let (dividend, _) = create_test_polynomials(&ring, degree);
        let (_, divisor) = create_test_polynomials(&ring, degree / 2);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(dividend.div_exact(&ring, &divisor).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_integer_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_reduction");
    let ring = IntegerRing::integers();

    for degree in [10, 20, 50, 100] {
        let (dividend, _) = create_test_polynomials(&ring, degree);
        let (_, divisor) = create_test_polynomials(&ring, degree / 2);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(dividend.reduce(&divisor).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_derivative(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivative");
    let ring = IntegerRing::integers();

    for degree in [10, 50, 100, 500] {
        let (poly, _) = create_test_polynomials(&ring, degree);
        let mut target = DensePolynomial::with_degree_bound(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly.derivative_into(&ring, &mut target).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dense_multiplication,
    benchmark_pseudo_division,
    benchmark_modular_division,
    benchmark_integer_reduction,
    benchmark_derivative
);
criterion_main!(benches);
