/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::cmp::Ordering;
use ::std::collections::hash_map::DefaultHasher;
use ::std::fmt;
use ::std::hash::{Hash, Hasher};
use ::std::ops::{Deref, DerefMut};
use ::std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use ::std::ops::{Mul, Div, MulAssign, DivAssign};

use crate::chunk::{ChunkT, Dim, Shape};
use crate::matrix::Matrix;
use crate::traits::{Semiring, Ring, Field};

/// A column vector of length `N`.
///
/// This is a `Matrix<X, N, 1>` with named accessors, and it derefs to one.
/// Indexing is therefore 1-based like everything else: `v[1] == v.x()`.
pub struct Vector<X, const N: usize>(pub Matrix<X, N, 1>)
where Dim<N, 1>: Shape<X>;

// `Vector::new` exists once per length, so calls to it go through these.
pub type V2<X> = Vector<X, 2>;
pub type V3<X> = Vector<X, 3>;
pub type V4<X> = Vector<X, 4>;

impl<X, const N: usize> Clone for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline]
    fn clone(&self) -> Self
    { Vector(self.0.clone()) }
}

impl<X, const N: usize> Copy for Vector<X, N>
where
    Dim<N, 1>: Shape<X>,
    ChunkT<X, N, 1>: Copy,
{ }

impl<X, const N: usize> Deref for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    type Target = Matrix<X, N, 1>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const N: usize> DerefMut for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<X, const N: usize> From<Matrix<X, N, 1>> for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline(always)]
    fn from(m: Matrix<X, N, 1>) -> Self { Vector(m) }
}

impl<X: Copy, const N: usize> From<[X; N]> for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline(always)]
    fn from(arr: [X; N]) -> Self { Vector(Matrix::from_columns([arr])) }
}

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Inner product of two vectors, as the 1x1 product `transpose(a) * b`.
#[inline(always)]
pub fn dot<X: Semiring, const N: usize>(a: &Vector<X, N>, b: &Vector<X, N>) -> X
where
    Dim<N, 1>: Shape<X>,
    Dim<1, N>: Shape<X>,
{ (a.0.t() * &b.0).scalar() }

/// Cross product of two 3-vectors.
#[inline(always)]
pub fn cross<X: Ring>(a: &Vector<X, 3>, b: &Vector<X, 3>) -> Vector<X, 3>
{ a.cross(b) }

impl<X: Copy, const N: usize> Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    /// Construct from a function of the 1-based index.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> X,
    { Vector(Matrix::from_fn(|i, _| f(i))) }

    #[inline(always)]
    pub fn len(&self) -> usize { N }

    #[inline(always)]
    pub fn into_matrix(self) -> Matrix<X, N, 1>
    { self.0 }
}

impl<X: Semiring, const N: usize> Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline(always)]
    pub fn zero() -> Self
    { Vector(Matrix::zero()) }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `Vector::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> X
    where Dim<1, N>: Shape<X>,
    { dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    where Dim<1, N>: Shape<X>,
    { dot(self, self) }
}

impl<X: Field, const N: usize> Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    where Dim<1, N>: Shape<X>,
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    ///
    /// The zero vector produces NaN components.
    #[inline(always)]
    pub fn unit(&self) -> Self
    where Dim<1, N>: Shape<X>,
    { self / self.norm() }
}

// Named accessors and literal constructors.
gen_each!{
    [
        {2 [x x_mut 1] [y y_mut 2]}
        {3 [x x_mut 1] [y y_mut 2] [z z_mut 3]}
        {4 [x x_mut 1] [y y_mut 2] [z z_mut 3] [w w_mut 4]}
    ]
    impl_named!(
        {$n:tt $([$name:ident $name_mut:ident $k:tt])+}
    ) => {
        impl<X: Copy> Vector<X, $n> {
            #[inline(always)]
            pub fn new($($name: X),+) -> Self
            { Vector(Matrix::from_columns([[$($name),+]])) }

            $(
                #[inline(always)]
                pub fn $name(&self) -> X { self.0[$k] }

                #[inline(always)]
                pub fn $name_mut(&mut self) -> &mut X { &mut self.0[$k] }
            )+
        }
    }
}

impl<X: Copy> Vector<X, 2> {
    /// Append a third component.
    #[inline]
    pub fn extend(&self, z: X) -> Vector<X, 3>
    { V3::new(self.x(), self.y(), z) }
}

impl<X: Copy> Vector<X, 3> {
    /// Append a fourth component.
    #[inline]
    pub fn extend(&self, w: X) -> Vector<X, 4>
    { V4::new(self.x(), self.y(), self.z(), w) }

    /// Drop the last component.
    #[inline]
    pub fn truncate(&self) -> Vector<X, 2>
    { V2::new(self.x(), self.y()) }
}

impl<X: Copy> Vector<X, 4> {
    /// Drop the last component.
    #[inline]
    pub fn truncate(&self) -> Vector<X, 3>
    { V3::new(self.x(), self.y(), self.z()) }
}

impl<X: Ring> Vector<X, 3> {
    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        V3::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

// ---------------------------------------------------------------------------
// comparison, hashing, formatting

impl<X: Copy + PartialEq, const N: usize> PartialEq for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool
    { self.0 == other.0 }
}

impl<X: Copy + Eq, const N: usize> Eq for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{ }

/// Lexicographic, starting from the first component.
impl<X: Copy + PartialOrd, const N: usize> PartialOrd for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    { self.0.as_slice().partial_cmp(other.0.as_slice()) }
}

impl<X: Copy + Ord, const N: usize> Ord for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering
    { self.0.as_slice().cmp(other.0.as_slice()) }
}

// Each component is hashed on its own, and the two hashes are combined by xor.
impl<X: Semiring> Hash for Vector<X, 2> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let component = |x: X| {
            let mut h = DefaultHasher::new();
            x.hash_scalar(&mut h);
            h.finish()
        };
        state.write_u64(component(self.x()) ^ component(self.y()));
    }
}

impl<X: Copy + fmt::Debug, const N: usize> fmt::Debug for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(self.0.as_slice(), f) }
}

// Display applies the format to each element.
impl<X: Copy + fmt::Display, const N: usize> fmt::Display for Vector<X, N>
where Dim<N, 1>: Shape<X>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, x) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------
// arithmetic, forwarded to the column matrix

gen_each!{
    @{by_ref}
    @{by_ref_2}
    impl_v_binops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize>
            Add<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
        where Dim<N, 1>: Shape<X>,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { Vector(&self.0 + &other.0) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring, const N: usize>
            Sub<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
        where Dim<N, 1>: Shape<X>,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { Vector(&self.0 - &other.0) }
        }

        // matrix * vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const N: usize>
            Mul<$($ref_b)* Vector<X, N>> for $($ref_a)* Matrix<X, M, N>
        where
            Dim<M, N>: Shape<X>,
            Dim<N, 1>: Shape<X>,
            Dim<M, 1>: Shape<X>,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { Vector(self * &other.0) }
        }
    }
}

gen_each!{
    @{by_ref}
    impl_v_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring, const N: usize> Neg for $($ref_a)* Vector<X, N>
        where Dim<N, 1>: Shape<X>,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { Vector(-&self.0) }
        }

        // vector * scalar
        impl<$($lt_a)* X: Semiring, const N: usize> Mul<X> for $($ref_a)* Vector<X, N>
        where Dim<N, 1>: Shape<X>,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Vector(&self.0 * scalar) }
        }

        // vector / scalar
        impl<$($lt_a)* X: Field, const N: usize> Div<X> for $($ref_a)* Vector<X, N>
        where Dim<N, 1>: Shape<X>,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Vector(&self.0 / scalar) }
        }
    }
}

gen_each!{
    @{semiring}
    @{by_ref}
    impl_scalar_vector_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* Vector<$X, N>> for $X
        where Dim<N, 1>: Shape<$X>,
        {
            type Output = Vector<$X, N>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<$X, N>) -> Self::Output
            { vector * self }
        }
    }
}

impl<X, B, const N: usize> AddAssign<B> for Vector<X, N>
where
    Dim<N, 1>: Shape<X>,
    for<'a> &'a Self: Add<B, Output=Self>,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

impl<X, B, const N: usize> SubAssign<B> for Vector<X, N>
where
    Dim<N, 1>: Shape<X>,
    for<'a> &'a Self: Sub<B, Output=Self>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

impl<X, B, const N: usize> MulAssign<B> for Vector<X, N>
where
    Dim<N, 1>: Shape<X>,
    for<'a> &'a Self: Mul<B, Output=Self>,
{
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

impl<X, B, const N: usize> DivAssign<B> for Vector<X, N>
where
    Dim<N, 1>: Shape<X>,
    for<'a> &'a Self: Div<B, Output=Self>,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::std::collections::HashSet;

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn accessors() {
        let mut v = V4::new(1, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        assert_eq!((v[1], v[4]), (1, 4));
        assert_eq!(v[(2, 1)], 2);

        *v.z_mut() = 30;
        *v.w_mut() += 10;
        assert_eq!(v, Vector::from([1, 2, 30, 14]));
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn extend_and_truncate() {
        let v2 = V2::new(1.0, 2.0);
        let v3 = v2.extend(0.5);
        assert_eq!(v3, V3::new(1.0, 2.0, 0.5));
        assert_eq!(v3.extend(1.0), V4::new(1.0, 2.0, 0.5, 1.0));
        assert_eq!(v3.extend(1.0).truncate(), v3);
        assert_eq!(v3.truncate(), v2);
    }

    #[test]
    fn cross_product() {
        let x = V3::new(1.0, 0.0, 0.0);
        let y = V3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(&x, &y), V3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), V3::new(0.0, 0.0, -1.0));

        let a = V3::new(2, -1, 5);
        let b = V3::new(3, 4, -2);
        let c = a.cross(&b);
        assert_eq!(Vector::dot(&a, &c), 0);
        assert_eq!(Vector::dot(&b, &c), 0);
    }

    #[test]
    fn dot_and_norm() {
        let v = V2::new(3.0, 4.0);
        assert_eq!(dot(&v, &V2::new(1.0, -1.0)), -1.0);
        assert_eq!(v.sqnorm(), 25.0);
        assert_eq!(v.norm(), 5.0);
        assert_close!(v.unit().as_slice(), &[0.6, 0.8][..]);
        assert_close!(V4::new(1.0, 2.0, 2.0, 4.0).unit().norm(), 1.0);
    }

    #[test]
    fn zero_vector_unit_is_not_finite() {
        let u = Vector::<f64, 3>::zero().unit();
        assert!(u.iter().all(|x| !x.is_finite()));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut vs = vec![
            V3::new(2, 0, 0),
            V3::new(1, 5, 0),
            V3::new(1, 2, 9),
            V3::new(1, 2, 3),
        ];
        vs.sort();
        assert_eq!(vs, vec![
            V3::new(1, 2, 3),
            V3::new(1, 2, 9),
            V3::new(1, 5, 0),
            V3::new(2, 0, 0),
        ]);
        assert!(V2::new(0.5, 1.0) < V2::new(0.5, 2.0));
        assert_eq!(V2::new(f64::NAN, 1.0).partial_cmp(&V2::new(0.0, 1.0)), None);
    }

    #[test]
    fn hash_2d() {
        assert_eq!(hash_of(&V2::new(0.0, 1.5)), hash_of(&V2::new(-0.0, 1.5)));
        // xor of the component hashes is symmetric
        assert_eq!(hash_of(&V2::new(1.0, 2.0)), hash_of(&V2::new(2.0, 1.0)));

        let set = vec![V2::new(1, 2), V2::new(3, 4), V2::new(1, 2)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&V2::new(3, 4)));
    }

    #[test]
    fn arithmetic() {
        let a = V3::new(1, 2, 3);
        let b = V3::new(-1, 0, 4);
        assert_eq!(&a + &b, V3::new(0, 2, 7));
        assert_eq!(a - b, V3::new(2, 2, -1));
        assert_eq!(-a, V3::new(-1, -2, -3));
        assert_eq!(2i32 * a, a * 2);

        let mut c = a;
        c += b;
        c *= 3i32;
        assert_eq!(c, V3::new(0, 6, 21));
        assert_eq!(V2::new(1.0, 3.0) / 2.0, V2::new(0.5, 1.5));
    }

    #[test]
    fn mat_vec() {
        let m = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(V2::new(1, 7), &m * V3::new(4, -3, 1));
        // try with the other dimension longer so that we make sure the sums
        // are over the right indices
        assert_eq!(V3::new(-8, -7, -6), &m.t() * &V2::new(4, -3));
    }

    #[test]
    fn formatting() {
        let v = V2::new(1.0, 0.25);
        assert_eq!(format!("{:?}", v), "[1.0, 0.25]");
        assert_eq!(format!("{:.2}", v), "[1.00, 0.25]");
    }
}
