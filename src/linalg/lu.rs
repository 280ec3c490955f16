/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! LU decomposition with a row permutation.

use ::fixmat_matrix::{Dim, Field, Matrix, Semiring, Shape, Vector};

use crate::config::{LuConfig, Pivoting};

/// The identity matrix.
#[inline]
pub fn eye<X: Semiring, const N: usize>() -> Matrix<X, N, N>
where Dim<N, N>: Shape<X>,
{ Matrix::from_fn(|i, j| if i == j { X::one() } else { X::zero() }) }

/// Decompose `m` such that `pivot * m == l * u`, using the default config.
///
/// `l` is unit lower triangular, `u` is upper triangular, and `pivot` is a
/// row permutation of the identity.  All three are overwritten.  The return
/// value is the number of row swaps that went into `pivot`.
///
/// Zero pivots are not detected; they show up as non-finite values in `l`.
/// See `Lu::singular_column`.
#[inline]
pub fn lu<X: Field, const M: usize, const N: usize>(
    m: &Matrix<X, M, N>,
    l: &mut Matrix<X, M, M>,
    u: &mut Matrix<X, M, N>,
    pivot: &mut Matrix<X, M, M>,
) -> usize
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
{ lu_with(&LuConfig::default(), m, l, u, pivot) }

/// `lu` with explicit settings.
pub fn lu_with<X: Field, const M: usize, const N: usize>(
    config: &LuConfig,
    m: &Matrix<X, M, N>,
    l: &mut Matrix<X, M, M>,
    u: &mut Matrix<X, M, N>,
    pivot: &mut Matrix<X, M, M>,
) -> usize
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
{
    match config.pivoting {
        Pivoting::Raw => lu_raw(m, l, u, pivot),
        Pivoting::Magnitude => lu_partial(m, l, u, pivot),
    }
}

fn lu_raw<X: Field, const M: usize, const N: usize>(
    m: &Matrix<X, M, N>,
    l: &mut Matrix<X, M, M>,
    u: &mut Matrix<X, M, N>,
    pivot: &mut Matrix<X, M, M>,
) -> usize
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
{
    *pivot = eye();
    *l = Matrix::zero();
    *u = Matrix::zero();

    // Build the permutation.  Note that the search looks at the input matrix
    // and not at the partially permuted one.
    let mut swaps = 0;
    for i in 1..=M.min(N) {
        let mut max = m[(i, i)];
        let mut row = i;
        for j in i..=M {
            if m[(j, i)] > max {
                max = m[(j, i)];
                row = j;
            }
        }

        if row != i {
            trace!("lu: swapping rows {} and {} of the permutation", i, row);
            swap_rows(pivot, i, row);
            swaps += 1;
        }
    }

    let a = &*pivot * m;

    // Doolittle
    for j in 1..=N {
        for i in 1..=j.min(M) {
            let s: X = (1..i).map(|k| u[(k, j)] * l[(i, k)]).sum();
            u[(i, j)] = a[(i, j)] - s;
        }

        if j <= M {
            for i in j..=M {
                let s: X = (1..j).map(|k| u[(k, j)] * l[(i, k)]).sum();
                l[(i, j)] = (a[(i, j)] - s) / u[(j, j)];
            }
        }
    }
    // tall matrices leave the trailing part of l as identity
    for j in (N + 1)..=M {
        l[(j, j)] = X::one();
    }

    swaps
}

// Elimination with the pivot for column `k` taken from the partly reduced
// rows, so that a swap made for an earlier column is seen by later ones.
fn lu_partial<X: Field, const M: usize, const N: usize>(
    m: &Matrix<X, M, N>,
    l: &mut Matrix<X, M, M>,
    u: &mut Matrix<X, M, N>,
    pivot: &mut Matrix<X, M, M>,
) -> usize
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
{
    *pivot = eye();
    *l = eye();

    let mut a = m.clone();
    let mut swaps = 0;
    for k in 1..=M.min(N) {
        let mut row = k;
        for i in (k + 1)..=M {
            if a[(i, k)].abs() > a[(row, k)].abs() {
                row = i;
            }
        }

        if row != k {
            trace!("lu: swapping rows {} and {} during elimination", k, row);
            swap_rows(&mut a, k, row);
            swap_rows(pivot, k, row);
            // only the multipliers already written move with the row
            for c in 1..k {
                let tmp = l[(k, c)];
                l[(k, c)] = l[(row, c)];
                l[(row, c)] = tmp;
            }
            swaps += 1;
        }

        for i in (k + 1)..=M {
            let factor = a[(i, k)] / a[(k, k)];
            l[(i, k)] = factor;
            for j in k..=N {
                a[(i, j)] = a[(i, j)] - factor * a[(k, j)];
            }
        }
    }

    *u = Matrix::from_fn(|i, j| if i <= j { a[(i, j)] } else { X::zero() });
    swaps
}

fn swap_rows<X: Copy, const M: usize, const N: usize>(m: &mut Matrix<X, M, N>, a: usize, b: usize)
where Dim<M, N>: Shape<X>,
{
    for c in 1..=N {
        let tmp = m[(a, c)];
        m[(a, c)] = m[(b, c)];
        m[(b, c)] = tmp;
    }
}

/// Solve `l * u * x == pivot * b` by forward and then backward substitution.
///
/// The factors are those produced by `lu` on a square matrix.
pub fn solvelu<X: Field, const M: usize>(
    l: &Matrix<X, M, M>,
    u: &Matrix<X, M, M>,
    pivot: &Matrix<X, M, M>,
    b: &Vector<X, M>,
) -> Vector<X, M>
where
    Dim<M, M>: Shape<X>,
    Dim<M, 1>: Shape<X>,
{
    let pb = pivot * b;

    // L y = P b
    let mut y = Vector::<X, M>::zero();
    for i in 1..=M {
        let s: X = (1..i).map(|j| l[(i, j)] * y[j]).sum();
        y[i] = (pb[i] - s) / l[(i, i)];
    }

    // U x = y
    let mut x = Vector::<X, M>::zero();
    for i in (1..=M).rev() {
        let s: X = ((i + 1)..=M).map(|j| u[(i, j)] * x[j]).sum();
        x[i] = (y[i] - s) / u[(i, i)];
    }
    x
}

/// Owned result of a decomposition.
///
/// ```
/// use fixmat_linalg::Lu;
/// use fixmat_matrix::Matrix;
///
/// let m = Matrix::from_rows([[2.0, 1.0], [4.0, 3.0]]);
/// let lu = Lu::new(&m);
/// assert_eq!(lu.swaps, 1);
/// assert_eq!(lu.det(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Lu<X, const M: usize, const N: usize>
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
    X: Semiring,
{
    pub l: Matrix<X, M, M>,
    pub u: Matrix<X, M, N>,
    pub pivot: Matrix<X, M, M>,
    /// Number of row swaps in `pivot`.
    pub swaps: usize,
}

impl<X: Field, const M: usize, const N: usize> Lu<X, M, N>
where
    Dim<M, N>: Shape<X>,
    Dim<M, M>: Shape<X>,
{
    pub fn new(m: &Matrix<X, M, N>) -> Self
    { Self::with_config(&LuConfig::default(), m) }

    pub fn with_config(config: &LuConfig, m: &Matrix<X, M, N>) -> Self {
        let mut l = Matrix::zero();
        let mut u = Matrix::zero();
        let mut pivot = Matrix::zero();
        let swaps = lu_with(config, m, &mut l, &mut u, &mut pivot);
        Lu { l, u, pivot, swaps }
    }

    /// First 1-based column whose pivot in `u` is exactly zero.
    pub fn singular_column(&self) -> Option<usize> {
        (1..=M.min(N)).find(|&k| self.u[(k, k)] == X::zero())
    }

    pub fn is_singular(&self) -> bool
    { self.singular_column().is_some() }

    /// `+1` for an even number of swaps, `-1` for odd.
    pub fn parity(&self) -> X {
        match self.swaps % 2 {
            0 => X::one(),
            _ => -X::one(),
        }
    }
}

impl<X: Field, const N: usize> Lu<X, N, N>
where
    Dim<N, N>: Shape<X>,
{
    /// Solve `m * x == b` for the decomposed `m`.
    pub fn solve(&self, b: &Vector<X, N>) -> Vector<X, N>
    where Dim<N, 1>: Shape<X>,
    { solvelu(&self.l, &self.u, &self.pivot, b) }

    /// Determinant of the decomposed matrix.
    pub fn det(&self) -> X
    { (1..=N).fold(self.parity(), |acc, k| acc * self.u[(k, k)]) }
}
