/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Reasons a checked kernel refused to produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The decomposition produced an exactly zero pivot.
    #[error("matrix is singular (zero pivot in column {column})")]
    Singular { column: usize },

    /// The result contains NaN or infinite values.
    #[error("result is not finite (first bad element at ({row}, {col}))")]
    NonFinite { row: usize, col: usize },
}
