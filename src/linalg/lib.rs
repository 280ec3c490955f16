/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Linear algebra kernels built on LU decomposition.
//!
//! None of these carry state between calls.  The unchecked kernels (`solve`,
//! `inv`, `det`) let a singular input run to completion and produce non-finite
//! output; `try_solve` and `try_inv` turn that into a `LinalgError`.

#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

mod config;
mod error;
mod lu;
mod solve;
pub mod coords;

pub use crate::config::{LuConfig, Pivoting};
pub use crate::error::LinalgError;
pub use crate::lu::{eye, lu, lu_with, solvelu, Lu};
pub use crate::solve::{det, inv, solve, try_inv, try_solve};
