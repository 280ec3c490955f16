/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-dimension matrices and vectors.
//!
//! The shape of a `Matrix<X, M, N>` is part of its type.  Small matrices are
//! stored inline and are `Copy`; beyond `chunk::STACK_LIMIT` elements the
//! storage moves to the heap.  All public indexing is 1-based.
//!
//! Shapes exist for 1 through 64 rows and 1 through 64 columns, so heap
//! storage covers 1025 to 4096 elements.  Anything larger has no `Shape` impl:
//!
//! ```compile_fail
//! let _ = fixmat_matrix::Matrix::<f64, 65, 1>::zero();
//! ```

#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;
#[macro_use]
extern crate log;

#[macro_use] mod macros;
mod traits;
pub mod chunk;
mod matrix;
mod ops;
mod vector;

pub use crate::traits::{Field, Ring, Semiring};
#[doc(hidden)]
pub use crate::traits::internal;

pub use crate::chunk::{Dim, Location, Shape, STACK_LIMIT};
pub use crate::matrix::Matrix;
pub use crate::ops::transpose;
pub use crate::vector::{Vector, V2, V3, V4, cross, dot};
