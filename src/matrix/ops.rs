/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use ::std::ops::{Mul, Div, MulAssign, DivAssign};

use crate::chunk::{Dim, Shape};
use crate::matrix::Matrix;
use crate::traits::{Semiring, Ring, Field};

/// Transpose, as a free function.
#[inline(always)]
pub fn transpose<X: Copy, const M: usize, const N: usize>(m: &Matrix<X, M, N>) -> Matrix<X, N, M>
where
    Dim<M, N>: Shape<X>,
    Dim<N, M>: Shape<X>,
{ m.t() }

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

// NOTE: Operator impls are deliberately between matrices of the same scalar type,
//       rather than e.g. Matrix<T> and Matrix<U> where T: Add<U>.
gen_each!{
    @{by_ref}
    @{by_ref_2}
    impl_add_sub!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const N: usize>
            Add<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
        where Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output {
                let (a, b) = (self.as_slice(), other.as_slice());
                Matrix::from_flat_fn(|k| a[k] + b[k])
            }
        }

        // matrix - matrix, defined as the sum with the negation
        impl<$($lt_a)* $($lt_b)* X: Ring, const M: usize, const N: usize>
            Sub<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
        where Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output
            { self + -other }
        }
    }
}

// ---------------------------------------------------------------------------
// unary ops

gen_each!{
    @{by_ref}
    impl_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring, const M: usize, const N: usize> Neg for $($ref_a)* Matrix<X, M, N>
        where Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { self.map(|x| -x) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

// scalar `op` matrix
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    @{by_ref}
    impl_scalar_matrix_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * matrix
        impl<$($lt_a)* const M: usize, const N: usize> Mul<$($ref_a)* Matrix<$X, M, N>> for $X
        where Dim<M, N>: Shape<$X>,
        {
            type Output = Matrix<$X, M, N>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<$X, M, N>) -> Self::Output
            { matrix * self }
        }
    }
}

// matrix `op` scalar
gen_each!{
    @{by_ref}
    impl_matrix_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix * scalar
        impl<$($lt_a)* X: Semiring, const M: usize, const N: usize> Mul<X> for $($ref_a)* Matrix<X, M, N>
        where Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { self.map(|x| x * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Field, const M: usize, const N: usize> Div<X> for $($ref_a)* Matrix<X, M, N>
        where Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { self.map(|x| x / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix product

gen_each!{
    @{by_ref}
    @{by_ref_2}
    impl_matmul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const K: usize, const N: usize>
            Mul<$($ref_b)* Matrix<X, K, N>> for $($ref_a)* Matrix<X, M, K>
        where
            Dim<M, K>: Shape<X>,
            Dim<K, N>: Shape<X>,
            Dim<M, N>: Shape<X>,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, K, N>) -> Self::Output {
                Matrix::from_fn(|i, j| {
                    let mut acc = X::zero();
                    for k in 1..=K {
                        acc = acc + self[(i, k)] * other[(k, j)];
                    }
                    acc
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

// matrix += matrix;
impl<X, B, const M: usize, const N: usize> AddAssign<B> for Matrix<X, M, N>
where
    Dim<M, N>: Shape<X>,
    for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// matrix -= matrix;
impl<X, B, const M: usize, const N: usize> SubAssign<B> for Matrix<X, M, N>
where
    Dim<M, N>: Shape<X>,
    for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// matrix *= scalar;
// matrix *= square matrix;
impl<X, B, const M: usize, const N: usize> MulAssign<B> for Matrix<X, M, N>
where
    Dim<M, N>: Shape<X>,
    for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// matrix /= scalar;
impl<X, B, const M: usize, const N: usize> DivAssign<B> for Matrix<X, M, N>
where
    Dim<M, N>: Shape<X>,
    for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::Rng as _;

    fn random<const M: usize, const N: usize>() -> Matrix<f64, M, N>
    where Dim<M, N>: Shape<f64>,
    {
        let mut rng = ::rand::thread_rng();
        Matrix::from_fn(|_, _| rng.gen_range(-10.0..10.0))
    }

    #[test]
    fn mat_mat() {
        let eye2 = Matrix::from_rows([[1, 0], [0, 1i32]]);
        let eye3 = Matrix::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1i32]]);

        let a = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);

        let b = Matrix::from_rows([
            [1,  1],
            [1, -1],
            [0,  1],
        ]);

        let a_dot_b = Matrix::from_rows([
            [3, 2],
            [9, 5],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);
    }

    #[test]
    fn row_times_column() {
        let row = Matrix::from_rows([[1, 2, 3]]);
        let col = Matrix::from_rows([[4], [-5], [6]]);
        assert_eq!((&row * &col).scalar(), 12);
        assert_eq!(&col * &row, Matrix::from_rows([
            [  4,   8,  12],
            [ -5, -10, -15],
            [  6,  12,  18],
        ]));
    }

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows([[1.0, -2.0], [0.5, 4.0]]);
        let b = Matrix::from_rows([[3.0, 1.0], [-1.0, 0.0]]);

        assert_eq!(&a + &a, &a * 2.0);
        assert_eq!(&a * 5.0, 5.0f64 * &a);
        assert_eq!(&a * 5.0, Matrix::from_rows([[5.0, -10.0], [2.5, 20.0]]));
        assert_eq!(&a - &b, &a + -&b);
        assert_eq!(&a - &b, Matrix::from_rows([[-2.0, -3.0], [1.5, 4.0]]));
        assert_eq!(-(-&a), a);
        assert_eq!(&a / 2.0, &a * 0.5);
    }

    #[test]
    fn unsigned_scalars() {
        let a = Matrix::from_rows([[1u8, 2], [3, 4]]);
        assert_eq!(3u8 * &a, Matrix::from_rows([[3, 6], [9, 12]]));
        assert_eq!(&a + &a, a * 2);
    }

    #[test]
    fn assign_ops() {
        let mut a = Matrix::from_rows([[1, 2], [3, 4]]);
        a += Matrix::from_rows([[1, 1], [1, 1]]);
        assert_eq!(a, Matrix::from_rows([[2, 3], [4, 5]]));
        a -= &Matrix::from_rows([[2, 2], [2, 2]]);
        assert_eq!(a, Matrix::from_rows([[0, 1], [2, 3]]));
        a *= 3i32;
        assert_eq!(a, Matrix::from_rows([[0, 3], [6, 9]]));
        a *= Matrix::from_rows([[0, 1], [1, 0]]);
        assert_eq!(a, Matrix::from_rows([[3, 0], [9, 6]]));

        let mut b = Matrix::from_rows([[1.0, 2.0]]);
        b /= 4.0;
        assert_eq!(b, Matrix::from_rows([[0.25, 0.5]]));
    }

    #[test]
    fn random_properties() {
        for _ in 0..20 {
            let a = random::<3, 4>();
            let b = random::<4, 2>();
            let c = random::<2, 5>();

            assert_eq!(transpose(&transpose(&a)), a);
            assert_eq!(&a + &a, &a * 2.0);
            assert_eq!(transpose(&(&a * &b)), &b.t() * &a.t());
            assert_close!(abs=1e-9, ((&a * &b) * &c).as_slice(), (&a * (&b * &c)).as_slice());
        }
    }

    #[test]
    fn heap_products() {
        let a = Matrix::<f64, 40, 30>::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        let b = Matrix::<f64, 30, 40>::from_fn(|i, j| (i * j) as f64);
        let c = &a * &b;
        assert_eq!(c.get_row(30), b.get_row(30));
        assert_eq!(c.get_row(35), Matrix::zero());
        assert_eq!(&c + &c, c * 2.0);
    }
}
