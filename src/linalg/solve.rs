/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::fixmat_matrix::{Dim, Field, Matrix, Shape, Vector};

use crate::error::LinalgError;
use crate::lu::{eye, Lu};

struct AtLeast2x2<const N: usize>;

impl<const N: usize> AtLeast2x2<N> {
    const OK: () = assert!(N >= 2, "det requires at least a 2x2 matrix");
}

/// Determinant, from the diagonal of `u` and the parity of the permutation.
///
/// ```
/// use fixmat_linalg::det;
/// use fixmat_matrix::Matrix;
///
/// assert_eq!(det(&Matrix::<f64, 2, 2>::from_rows([[2.0, 1.0], [4.0, 3.0]])), 2.0);
/// ```
///
/// A 1x1 matrix is rejected at build time; collapse it with `Matrix::scalar`
/// instead.
///
/// ```compile_fail
/// use fixmat_linalg::det;
/// use fixmat_matrix::Matrix;
///
/// let _ = det(&Matrix::<f64, 1, 1>::from_rows([[3.0]]));
/// ```
pub fn det<X: Field, const N: usize>(m: &Matrix<X, N, N>) -> X
where Dim<N, N>: Shape<X>,
{
    let () = AtLeast2x2::<N>::OK;
    Lu::new(m).det()
}

/// Solve `a * x == b` column by column, decomposing `a` only once.
pub fn solve<X: Field, const N: usize, const P: usize>(
    a: &Matrix<X, N, N>,
    b: &Matrix<X, N, P>,
) -> Matrix<X, N, P>
where
    Dim<N, N>: Shape<X>,
    Dim<N, P>: Shape<X>,
    Dim<N, 1>: Shape<X>,
{ solve_lu(&Lu::new(a), b) }

/// Matrix inverse, as `solve(m, eye())`.
pub fn inv<X: Field, const N: usize>(m: &Matrix<X, N, N>) -> Matrix<X, N, N>
where
    Dim<N, N>: Shape<X>,
    Dim<N, 1>: Shape<X>,
{ solve(m, &eye()) }

/// `solve` that reports singular systems and non-finite results.
pub fn try_solve<X: Field, const N: usize, const P: usize>(
    a: &Matrix<X, N, N>,
    b: &Matrix<X, N, P>,
) -> Result<Matrix<X, N, P>, LinalgError>
where
    Dim<N, N>: Shape<X>,
    Dim<N, P>: Shape<X>,
    Dim<N, 1>: Shape<X>,
{
    let lu = Lu::new(a);
    if let Some(column) = lu.singular_column() {
        debug!("try_solve: zero pivot in column {} of a {}x{} matrix", column, N, N);
        return Err(LinalgError::Singular { column });
    }

    let out = solve_lu(&lu, b);
    check_finite(&out)?;
    Ok(out)
}

/// `inv` that reports singular matrices and non-finite results.
pub fn try_inv<X: Field, const N: usize>(m: &Matrix<X, N, N>) -> Result<Matrix<X, N, N>, LinalgError>
where
    Dim<N, N>: Shape<X>,
    Dim<N, 1>: Shape<X>,
{ try_solve(m, &eye()) }

fn solve_lu<X: Field, const N: usize, const P: usize>(
    lu: &Lu<X, N, N>,
    b: &Matrix<X, N, P>,
) -> Matrix<X, N, P>
where
    Dim<N, N>: Shape<X>,
    Dim<N, P>: Shape<X>,
    Dim<N, 1>: Shape<X>,
{
    let mut out = Matrix::zero();
    for c in 1..=P {
        let x = lu.solve(&Vector(b.get_column(c)));
        out.set_column(c, &x);
    }
    out
}

fn check_finite<X: Field, const M: usize, const N: usize>(m: &Matrix<X, M, N>) -> Result<(), LinalgError>
where Dim<M, N>: Shape<X>,
{
    match m.iter().position(|x| !x.is_finite()) {
        None => Ok(()),
        Some(k) => {
            let (row, col) = (k % M + 1, k / M + 1);
            debug!("check_finite: non-finite element at ({}, {})", row, col);
            Err(LinalgError::NonFinite { row, col })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rounds_to_eye<const N: usize>(r: &Matrix<f64, N, N>)
    where Dim<N, N>: Shape<f64>,
    {
        let rounded = r.map(|x| (x * 1000.0).round() / 1000.0);
        // (-0.0 == 0.0, so a tiny negative residual is fine)
        assert_eq!(rounded, eye(), "not the identity: {:?}", r);
    }

    #[test]
    fn inv_3x3() {
        let m = Matrix::from_rows([
            [ 4.0, -2.0, 1.0],
            [-3.0, -1.0, 4.0],
            [ 1.0, -1.0, 3.0],
        ]);
        assert_rounds_to_eye(&(&inv(&m) * &m));
        assert_rounds_to_eye(&(&m * &inv(&m)));
    }

    #[test]
    fn inv_4x4() {
        let m = Matrix::from_rows([
            [11.0,  9.0, 24.0, 2.0],
            [ 1.0,  5.0,  2.0, 6.0],
            [ 3.0, 17.0, 18.0, 1.0],
            [ 2.0,  5.0,  7.0, 1.0],
        ]);
        assert_rounds_to_eye(&(&inv(&m) * &m));
    }

    #[test]
    fn inv_known_values() {
        let actual = inv(&Matrix::from_rows([[7., 2.], [-11., 4.]]));
        let expected = Matrix::from_rows([
            [ 2./25., -1./25.],
            [11./50.,  7./50.],
        ]);
        assert_close!(abs=1e-12, actual.as_slice(), expected.as_slice());

        let actual = inv(&Matrix::from_rows([[1., 2., 4.], [5., 2., 1.], [3., 6., 3.]]));
        let expected = Matrix::from_rows([
            [ 0./1.,  1./4., -1./12.],
            [-1./6., -1./8., 19./72.],
            [ 1./3.,  0./1., -1./9. ],
        ]);
        assert_close!(abs=1e-12, actual.as_slice(), expected.as_slice());
    }

    #[test]
    fn solve_multiple_columns() {
        let a = Matrix::from_rows([
            [2.0, 1.0, 0.0],
            [1.0, 3.0, 1.0],
            [0.0, 1.0, 4.0],
        ]);
        let x = Matrix::from_rows([
            [1.0, -1.0],
            [2.0,  0.5],
            [3.0,  0.0],
        ]);
        let b = &a * &x;
        assert_close!(abs=1e-12, solve(&a, &b).as_slice(), x.as_slice());
        assert_close!(abs=1e-12, try_solve(&a, &b).unwrap().as_slice(), x.as_slice());
    }

    #[test]
    fn determinants() {
        assert_close!(det(&Matrix::from_rows([[2.0, 1.0], [4.0, 3.0]])), 2.0);
        assert_close!(det(&Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]])), -1.0);
        assert_close!(det(&eye::<f64, 5>()), 1.0);

        let m = Matrix::from_rows([
            [11.0,  9.0, 24.0, 2.0],
            [ 1.0,  5.0,  2.0, 6.0],
            [ 3.0, 17.0, 18.0, 1.0],
            [ 2.0,  5.0,  7.0, 1.0],
        ]);
        // one swap, so the product of the diagonal is negated
        assert_close!(rel=1e-9, det(&m), 284.0);
        assert_close!(rel=1e-9, det(&m.t()), 284.0);
    }

    #[test]
    fn checked_kernels_report_singular() {
        let m = Matrix::<f64, 3, 3>::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [1.0, 0.0, 1.0],
        ]);
        match try_inv(&m) {
            Err(LinalgError::Singular { .. }) => {},
            r => panic!("expected singular, got {:?}", r),
        }
        assert!(inv(&m).iter().any(|x| !x.is_finite()));

        let zero = Matrix::<f32, 2, 2>::zero();
        assert_eq!(try_inv(&zero), Err(LinalgError::Singular { column: 1 }));
    }

    #[test]
    fn checked_kernels_report_non_finite() {
        // back substitution computes 0 * inf for the first row
        let a = eye::<f64, 2>();
        let b = Matrix::from_rows([[1.0], [std::f64::INFINITY]]);
        assert_eq!(try_solve(&a, &b), Err(LinalgError::NonFinite { row: 1, col: 1 }));

        // the first column is fine, the second overflows in its first row only
        let a = Matrix::<f64, 2, 2>::from_rows([[1e-300, 0.0], [0.0, 1.0]]);
        let b = Matrix::from_rows([[1.0, 1e10], [1.0, 1.0]]);
        assert_eq!(try_solve(&a, &b), Err(LinalgError::NonFinite { row: 1, col: 2 }));
        assert_eq!(solve(&a, &b)[(2, 2)], 1.0);
    }

    #[test]
    fn first_non_finite_is_found_in_column_major_order() {
        let mut m = Matrix::<f64, 2, 2>::zero();
        assert_eq!(check_finite(&m), Ok(()));

        m[(1, 2)] = std::f64::NAN;
        m[(2, 1)] = std::f64::INFINITY;
        assert_eq!(check_finite(&m), Err(LinalgError::NonFinite { row: 2, col: 1 }));
    }
}
