/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!`, for comparing floats (or slices of them) in tests.
//!
//! ```
//! # #[macro_use] extern crate fixmat_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-3, &[1.0, 2.0][..], &[1.0004, 1.9996][..]);
//! # }
//! ```

/// Relative tolerance when none is given.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// `assert_close!([rel=R,] [abs=A,] left, right)`
///
/// `rel` defaults to `DEFAULT_REL_TOL` and `abs` to zero.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parse [$($t)*] [$crate::DEFAULT_REL_TOL] [0.0]}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parse [rel=$tol:expr, $($rest:tt)*] [$rel:expr] [$abs:expr]) => {
        $crate::assert_close_impl!{@parse [$($rest)*] [$tol] [$abs]}
    };
    (@parse [abs=$tol:expr, $($rest:tt)*] [$rel:expr] [$abs:expr]) => {
        $crate::assert_close_impl!{@parse [$($rest)*] [$rel] [$tol]}
    };
    (@parse [$a:expr, $b:expr $(,)?] [$rel:expr] [$abs:expr]) => {
        // match keeps temporaries in `$a` and `$b` alive
        match (&$a, &$b) {
            (a, b) => {
                let tol = $crate::Tolerances { rel: $rel, abs: $abs };
                if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
                    panic!("not nearly equal! ({:?})\n left: {:?}\nright: {:?}\n{}", tol, a, b, e);
                }
            },
        }
    };
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerances {
    /// The rule of Python's `math.isclose`.  Infinities are only close to
    /// themselves, and NaN is close to nothing.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        assert!(self.rel >= 0.0 && self.abs >= 0.0, "negative tolerance: {:?}", self);
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        (a - b).abs() < self.abs.max(self.rel * a.abs()).max(self.rel * b.abs())
    }
}

/// The first pair of elements that were not close.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("first mismatch at index {index}: {left:?} vs {right:?}")]
pub struct CheckCloseError {
    pub index: usize,
    pub left: f64,
    pub right: f64,
}

pub trait CheckClose {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        if tol.is_close(*self, *other) {
            Ok(())
        } else {
            Err(CheckCloseError { index: 0, left: *self, right: *other })
        }
    }
}

impl CheckClose for [f64] {
    fn check_close(&self, other: &[f64], tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "compared slices of different lengths");
        match self.iter().zip(other).position(|(&a, &b)| !tol.is_close(a, b)) {
            None => Ok(()),
            Some(index) => Err(CheckCloseError { index, left: self[index], right: other[index] }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_forms() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-3, &[1.0, 2.0, 3.0][..], &[1.0001, 1.9999, 3.0][..]);
        assert_close!(vec![0.5; 3].as_slice(), &[0.5, 0.5, 0.5][..]);
    }

    #[test]
    fn reports_first_mismatch() {
        let tol = Tolerances { rel: 0.0, abs: 1e-6 };
        let err = [1.0f64, 2.0, 3.0][..].check_close(&[1.0, 2.5, 4.0][..], tol).unwrap_err();
        assert_eq!(err, CheckCloseError { index: 1, left: 2.0, right: 2.5 });
    }

    #[test]
    fn infinities_and_nan() {
        let tol = Tolerances { rel: 1.0, abs: 1.0 };
        assert!(tol.is_close(std::f64::INFINITY, std::f64::INFINITY));
        assert!(!tol.is_close(std::f64::INFINITY, -std::f64::INFINITY));
        assert!(!tol.is_close(std::f64::NAN, std::f64::NAN));
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
