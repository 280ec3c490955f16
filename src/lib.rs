/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-dimension matrices, vectors, and LU-based linear algebra.
//!
//! ```
//! use fixmat::{inv, Matrix};
//!
//! let m = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]);
//! assert_eq!(inv(&m), Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]));
//! ```

pub use fixmat_matrix::*;
pub use fixmat_linalg::*;
