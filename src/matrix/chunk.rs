/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Backing storage for matrices.
//!
//! Which chunk type a shape uses is decided entirely in the type system.
//! `Dim<M, N>` implements `Shape<X>` for every supported shape, and each impl
//! picks its chunk through `Placement<{ M * N > STACK_LIMIT }>`.

use ::std::ops::{Index, IndexMut};
use ::slice_of_array::prelude::*;

/// Largest number of elements that is stored inline.
pub const STACK_LIMIT: usize = 32 * 32;

/// Where the elements of a chunk live.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Stack,
    Heap,
}

/// Column-major storage of exactly `M * N` elements.
///
/// Indexing is 0-based and panics when out of bounds.
pub trait Chunk<X>: Clone + Index<usize, Output=X> + IndexMut<usize> {
    const LOCATION: Location;

    /// Build from a function of the 0-based flat offset.
    fn from_fn<F: FnMut(usize) -> X>(f: F) -> Self;

    fn as_slice(&self) -> &[X];
    fn as_mut_slice(&mut self) -> &mut [X];
}

/// Inline storage, one array per column.
#[derive(Debug, Copy, Clone)]
pub struct StackChunk<X, const M: usize, const N: usize>([[X; M]; N]);

/// A single boxed allocation.
#[derive(Debug, Clone)]
pub struct HeapChunk<X, const M: usize, const N: usize>(Box<[X]>);

impl<X: Copy, const M: usize, const N: usize> Chunk<X> for StackChunk<X, M, N> {
    const LOCATION: Location = Location::Stack;

    #[inline]
    fn from_fn<F: FnMut(usize) -> X>(mut f: F) -> Self {
        StackChunk(::std::array::from_fn(|j| ::std::array::from_fn(|i| f(j * M + i))))
    }

    #[inline(always)]
    fn as_slice(&self) -> &[X] { self.0.flat() }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [X] { self.0.flat_mut() }
}

impl<X: Copy, const M: usize, const N: usize> Chunk<X> for HeapChunk<X, M, N> {
    const LOCATION: Location = Location::Heap;

    fn from_fn<F: FnMut(usize) -> X>(f: F) -> Self {
        trace!("allocating {}x{} chunk ({} elements) on the heap", M, N, M * N);
        HeapChunk((0..M * N).map(f).collect::<Vec<_>>().into_boxed_slice())
    }

    #[inline(always)]
    fn as_slice(&self) -> &[X] { &self.0 }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [X] { &mut self.0 }
}

gen_each!{
    [{StackChunk} {HeapChunk}]
    impl_chunk_index!({$Chunk:ident}) => {
        impl<X: Copy, const M: usize, const N: usize> Index<usize> for $Chunk<X, M, N> {
            type Output = X;

            #[inline(always)]
            fn index(&self, k: usize) -> &X { &self.as_slice()[k] }
        }

        impl<X: Copy, const M: usize, const N: usize> IndexMut<usize> for $Chunk<X, M, N> {
            #[inline(always)]
            fn index_mut(&mut self, k: usize) -> &mut X { &mut self.as_mut_slice()[k] }
        }
    }
}

/// Type-level selector between the two chunk types.
pub struct Placement<const HEAP: bool>;

pub trait Place<X, const M: usize, const N: usize> {
    type Chunk: Chunk<X>;
}

impl<X: Copy, const M: usize, const N: usize> Place<X, M, N> for Placement<false> {
    type Chunk = StackChunk<X, M, N>;
}

impl<X: Copy, const M: usize, const N: usize> Place<X, M, N> for Placement<true> {
    type Chunk = HeapChunk<X, M, N>;
}

/// Marker for a matrix shape.
///
/// This is the bound that appears on nearly everything in the crate.  Writing
/// `Dim<M, N>: Shape<X>` in a where clause is how generic code asks for
/// a matrix of that shape to exist.
pub struct Dim<const M: usize, const N: usize>;

pub trait Shape<X> {
    type Chunk: Chunk<X>;
}

/// The chunk type used by `Matrix<X, M, N>`.
pub type ChunkT<X, const M: usize, const N: usize> = <Dim<M, N> as Shape<X>>::Chunk;

gen_each!{
    @{1...64}
    @{1...64}
    impl_shape!({$m:tt} {$n:tt}) => {
        impl<X: Copy> Shape<X> for Dim<$m, $n> {
            type Chunk = <Placement<{ $m * $n > STACK_LIMIT }> as Place<X, $m, $n>>::Chunk;
        }
    }
}
