/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(dead_code)]

use ::fixmat::{Dim, Matrix, Shape};
use ::rand::Rng;

pub fn init_logger() {
    let _ = ::env_logger::try_init();
}

/// Entries uniform in `[-10, 10)`.
pub fn random_matrix<R: Rng, const M: usize, const N: usize>(rng: &mut R) -> Matrix<f64, M, N>
where Dim<M, N>: Shape<f64>,
{ Matrix::from_fn(|_, _| rng.gen_range(-10.0..10.0)) }

/// A random matrix with a dominant diagonal, so that it is comfortably invertible.
pub fn random_invertible<R: Rng, const N: usize>(rng: &mut R) -> Matrix<f64, N, N>
where Dim<N, N>: Shape<f64>,
{
    let mut m = random_matrix::<R, N, N>(rng);
    for k in 1..=N {
        m[(k, k)] += 20.0 * N as f64;
    }
    m
}

/// Assert that `m` is the identity after rounding to three decimals.
pub fn assert_rounds_to_eye<const N: usize>(m: &Matrix<f64, N, N>)
where Dim<N, N>: Shape<f64>,
{
    for i in 1..=N {
        for j in 1..=N {
            let expected = if i == j { 1.0 } else { 0.0 };
            let rounded = (m[(i, j)] * 1000.0).round() / 1000.0;
            assert_eq!(rounded, expected, "element ({}, {}) of {:?}", i, j, m);
        }
    }
}
