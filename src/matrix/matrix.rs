/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::ops::{Index, IndexMut};
use ::std::fmt;
use ::num_traits::AsPrimitive;

use crate::chunk::{Chunk, ChunkT, Dim, Location, Shape};
use crate::traits::Semiring;

/// A dense `M x N` matrix.
///
/// Elements are stored in column-major order, and all indices taken by the
/// public API are **1-based**.  Whether the elements live inline or on the heap
/// depends only on the shape; see the `chunk` module.
pub struct Matrix<X, const M: usize, const N: usize>
where Dim<M, N>: Shape<X>,
{
    chunk: ChunkT<X, M, N>,
}

impl<X, const M: usize, const N: usize> Clone for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline]
    fn clone(&self) -> Self
    { Matrix { chunk: self.chunk.clone() } }
}

impl<X, const M: usize, const N: usize> Copy for Matrix<X, M, N>
where
    Dim<M, N>: Shape<X>,
    ChunkT<X, M, N>: Copy,
{ }

// ---------------------------------------------------------------------------
// construction and shape

impl<X: Copy, const M: usize, const N: usize> Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    pub const ROWS: usize = M;
    pub const COLS: usize = N;
    pub const LEN: usize = M * N;
    pub const LOCATION: Location = <ChunkT<X, M, N> as Chunk<X>>::LOCATION;

    #[inline(always)]
    pub fn rows(&self) -> usize { M }
    #[inline(always)]
    pub fn cols(&self) -> usize { N }

    /// Construct from a function of the 1-based `(row, column)`.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { Self::from_flat_fn(|k| f(k % M + 1, k / M + 1)) }

    /// Construct from a function of the 0-based column-major offset.
    #[inline(always)]
    pub(crate) fn from_flat_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { Matrix { chunk: Chunk::from_fn(f) } }

    /// Construct from exactly `M * N` elements in column-major order.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields any other number of elements.
    pub fn from_column_major<I>(iter: I) -> Self
    where I: IntoIterator<Item=X>,
    {
        let mut iter = iter.into_iter();
        let out = Self::from_flat_fn(|_| match iter.next() {
            Some(x) => x,
            None => panic!("a {}x{} matrix needs {} elements, got fewer", M, N, M * N),
        });
        assert!(
            iter.next().is_none(),
            "a {}x{} matrix needs {} elements, got more", M, N, M * N,
        );
        out
    }

    /// Construct from an array of columns.
    #[inline]
    pub fn from_columns(columns: [[X; M]; N]) -> Self
    { Self::from_flat_fn(|k| columns[k / M][k % M]) }

    /// Construct from an array of rows.
    ///
    /// This is usually the more readable way to write a matrix literal.
    #[inline]
    pub fn from_rows(rows: [[X; N]; M]) -> Self
    { Self::from_fn(|i, j| rows[i - 1][j - 1]) }

    #[inline(always)]
    pub fn as_slice(&self) -> &[X] { self.chunk.as_slice() }
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [X] { self.chunk.as_mut_slice() }

    /// Iterate over the elements in column-major order.
    #[inline(always)]
    pub fn iter(&self) -> ::std::slice::Iter<'_, X>
    { self.as_slice().iter() }

    /// Apply a function to each element.
    #[inline]
    pub fn map<Y: Copy, F>(&self, mut f: F) -> Matrix<Y, M, N>
    where
        F: FnMut(X) -> Y,
        Dim<M, N>: Shape<Y>,
    { Matrix::from_flat_fn(|k| f(self.chunk[k])) }

    /// Element-wise `as` conversion into another scalar type.
    #[inline]
    pub fn cast<Y>(&self) -> Matrix<Y, M, N>
    where
        X: AsPrimitive<Y>,
        Y: Copy + 'static,
        Dim<M, N>: Shape<Y>,
    { self.map(|x| x.as_()) }

    /// Non-panicking 1-based lookup.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&X> {
        if in_bounds(i, j, M, N) {
            Some(&self.chunk[offset::<M>(i, j)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut X> {
        if in_bounds(i, j, M, N) {
            Some(&mut self.chunk[offset::<M>(i, j)])
        } else {
            None
        }
    }

    /// Transpose.
    #[inline]
    pub fn t(&self) -> Matrix<X, N, M>
    where Dim<N, M>: Shape<X>,
    { Matrix::from_fn(|i, j| self[(j, i)]) }
}

impl<X: Semiring, const M: usize, const N: usize> Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline]
    pub fn zero() -> Self
    { Self::from_flat_fn(|_| X::zero()) }
}

impl<X: Semiring, const M: usize, const N: usize> Default for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline(always)]
    fn default() -> Self { Self::zero() }
}

// ---------------------------------------------------------------------------
// rows, columns, and submatrices

impl<X: Copy, const M: usize, const N: usize> Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    /// Copy out the 1-based column `c`.
    #[inline]
    pub fn get_column(&self, c: usize) -> Matrix<X, M, 1>
    where Dim<M, 1>: Shape<X>,
    { self.get_sub::<M, 1>(1, c) }

    /// Copy out the 1-based row `r`.
    #[inline]
    pub fn get_row(&self, r: usize) -> Matrix<X, 1, N>
    where Dim<1, N>: Shape<X>,
    { self.get_sub::<1, N>(r, 1) }

    /// Copy out the `P x Q` submatrix whose top left element is at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the submatrix does not fit inside this matrix.
    pub fn get_sub<const P: usize, const Q: usize>(&self, i: usize, j: usize) -> Matrix<X, P, Q>
    where Dim<P, Q>: Shape<X>,
    {
        check_sub(i, j, P, Q, M, N);
        Matrix::from_fn(|r, c| self[(i + r - 1, j + c - 1)])
    }

    /// Overwrite the 1-based column `c`.
    #[inline]
    pub fn set_column(&mut self, c: usize, column: &Matrix<X, M, 1>)
    where Dim<M, 1>: Shape<X>,
    { self.set_sub(1, c, column) }

    /// Overwrite the 1-based row `r`.
    #[inline]
    pub fn set_row(&mut self, r: usize, row: &Matrix<X, 1, N>)
    where Dim<1, N>: Shape<X>,
    { self.set_sub(r, 1, row) }

    /// Overwrite the `P x Q` block whose top left element is at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit inside this matrix.
    pub fn set_sub<const P: usize, const Q: usize>(&mut self, i: usize, j: usize, sub: &Matrix<X, P, Q>)
    where Dim<P, Q>: Shape<X>,
    {
        check_sub(i, j, P, Q, M, N);
        for c in 1..=Q {
            for r in 1..=P {
                self[(i + r - 1, j + c - 1)] = sub[(r, c)];
            }
        }
    }
}

#[inline(always)]
fn in_bounds(i: usize, j: usize, m: usize, n: usize) -> bool
{ 1 <= i && i <= m && 1 <= j && j <= n }

#[inline(always)]
fn offset<const M: usize>(i: usize, j: usize) -> usize
{ (j - 1) * M + (i - 1) }

#[inline]
fn check_sub(i: usize, j: usize, p: usize, q: usize, m: usize, n: usize) {
    assert!(
        1 <= i && 1 <= j && i + p - 1 <= m && j + q - 1 <= n,
        "{}x{} submatrix at ({}, {}) does not fit in a {}x{} matrix",
        p, q, i, j, m, n,
    );
}

// ---------------------------------------------------------------------------
// 1x1 matrices

impl<X: Copy> Matrix<X, 1, 1> {
    #[inline(always)]
    pub fn from_scalar(x: X) -> Self
    { Self::from_flat_fn(|_| x) }

    /// Collapse to the only element.
    #[inline(always)]
    pub fn scalar(&self) -> X
    { self.chunk[0] }
}

impl<X: Copy> From<X> for Matrix<X, 1, 1> {
    #[inline(always)]
    fn from(x: X) -> Self { Self::from_scalar(x) }
}

// ---------------------------------------------------------------------------
// indexing

impl<X: Copy, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    type Output = X;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &X {
        assert!(in_bounds(i, j, M, N), "index ({}, {}) out of bounds for {}x{} matrix", i, j, M, N);
        &self.chunk[offset::<M>(i, j)]
    }
}

impl<X: Copy, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut X {
        assert!(in_bounds(i, j, M, N), "index ({}, {}) out of bounds for {}x{} matrix", i, j, M, N);
        &mut self.chunk[offset::<M>(i, j)]
    }
}

/// Column-major linear index, starting from 1.
impl<X: Copy, const M: usize, const N: usize> Index<usize> for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    type Output = X;

    #[inline]
    fn index(&self, k: usize) -> &X {
        assert!(1 <= k && k <= M * N, "index {} out of bounds for {}x{} matrix", k, M, N);
        &self.chunk[k - 1]
    }
}

impl<X: Copy, const M: usize, const N: usize> IndexMut<usize> for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut X {
        assert!(1 <= k && k <= M * N, "index {} out of bounds for {}x{} matrix", k, M, N);
        &mut self.chunk[k - 1]
    }
}

impl<'a, X: Copy, const M: usize, const N: usize> IntoIterator for &'a Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    type Item = &'a X;
    type IntoIter = ::std::slice::Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.iter() }
}

// ---------------------------------------------------------------------------
// comparison and formatting

impl<X: Copy + PartialEq, const M: usize, const N: usize> PartialEq for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool
    { self.as_slice() == other.as_slice() }
}

impl<X: Copy + Eq, const M: usize, const N: usize> Eq for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{ }

// Debug output is a list of rows, which is also valid JSON and Python.
impl<X: Copy + fmt::Debug, const M: usize, const N: usize> fmt::Debug for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 1..=M {
            if i > 1 {
                write!(f, ", ")?;
            }
            f.debug_list().entries((1..=N).map(|j| &self[(i, j)])).finish()?;
        }
        write!(f, "]")
    }
}

// Display applies the format to each element, one row per line.
impl<X: Copy + fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<X, M, N>
where Dim<M, N>: Shape<X>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 1..=M {
            if i > 1 {
                writeln!(f)?;
            }
            for j in 1..=N {
                if j > 1 {
                    write!(f, " ")?;
                }
                fmt::Display::fmt(&self[(i, j)], f)?;
            }
        }
        Ok(())
    }
}
