/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Affine cartesian frames in two and three dimensions.
//!
//! A frame is a basis (the columns of `base` are the axes) together with an
//! origin.  It maps local coordinates to global ones.

use ::fixmat_matrix::{Field, Matrix, Vector};

use crate::lu::eye;
use crate::solve::inv;

macro_rules! impl_frame {
    ($(#[$meta:meta])* $Frame:ident, $n:tt, $h:tt) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq)]
        pub struct $Frame<X: Field> {
            base: Matrix<X, $n, $n>,
            origin: Vector<X, $n>,
        }

        impl<X: Field> Default for $Frame<X> {
            fn default() -> Self { Self::identity() }
        }

        impl<X: Field> $Frame<X> {
            pub fn new(base: Matrix<X, $n, $n>, origin: Vector<X, $n>) -> Self
            { $Frame { base, origin } }

            /// Standard axes at the global origin.
            pub fn identity() -> Self
            { Self::new(eye(), Vector::zero()) }

            /// Read a frame from an affine transform in homogeneous coordinates.
            ///
            /// Only the upper rows are read; the last row is assumed to be `0 ... 0 1`.
            pub fn from_homogeneous(m: &Matrix<X, $h, $h>) -> Self {
                let base = m.get_sub::<$n, $n>(1, 1);
                let origin = m.get_column($h).get_sub::<$n, 1>(1, 1);
                Self::new(base, Vector(origin))
            }

            /// The affine transform in homogeneous coordinates.
            pub fn to_homogeneous(&self) -> Matrix<X, $h, $h> {
                let mut m = Matrix::zero();
                m.set_sub(1, 1, &self.base);
                m.set_column($h, &self.origin.extend(X::one()));
                m
            }

            pub fn base(&self) -> &Matrix<X, $n, $n> { &self.base }
            pub fn origin(&self) -> &Vector<X, $n> { &self.origin }

            pub fn set_base(&mut self, base: Matrix<X, $n, $n>) { self.base = base; }
            pub fn set_origin(&mut self, origin: Vector<X, $n>) { self.origin = origin; }

            /// The 1-based axis `k`, which is column `k` of the base.
            pub fn axis(&self, k: usize) -> Vector<X, $n>
            { Vector(self.base.get_column(k)) }

            pub fn set_axis(&mut self, k: usize, axis: &Vector<X, $n>)
            { self.base.set_column(k, axis) }

            /// Local coordinates to global.
            pub fn project(&self, v: &Vector<X, $n>) -> Vector<X, $n>
            { &self.base * v + &self.origin }

            /// Global coordinates to local.
            pub fn unproject(&self, v: &Vector<X, $n>) -> Vector<X, $n>
            { inv(&self.base) * (v - &self.origin) }
        }
    };
}

impl_frame!{
    /// A frame in the plane.
    Frame2, 2, 3
}

impl_frame!{
    /// A frame in space.
    Frame3, 3, 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::fixmat_matrix::{V2, V3};

    #[test]
    fn identity_does_nothing() {
        let v = V3::new(1.5, -2.0, 0.25);
        let frame = Frame3::identity();
        assert_eq!(frame.project(&v), v);
        assert_eq!(frame.unproject(&v), v);
        assert_eq!(frame.to_homogeneous(), eye());
    }

    #[test]
    fn project_unproject_round_trip() {
        let mut frame = Frame2::new(
            Matrix::from_rows([[0.0, -2.0], [1.0, 0.0]]),
            V2::new(3.0, 4.0),
        );
        let v = V2::new(1.0, 1.0);
        assert_eq!(frame.project(&v), V2::new(1.0, 5.0));
        assert_close!(abs=1e-12, frame.unproject(&frame.project(&v)).as_slice(), v.as_slice());

        frame.set_axis(1, &V2::new(2.0, 2.0));
        assert_eq!(frame.axis(1), V2::new(2.0, 2.0));
        assert_eq!(frame.axis(2), V2::new(-2.0, 0.0));
        assert_close!(abs=1e-12, frame.unproject(&frame.project(&v)).as_slice(), v.as_slice());
    }

    #[test]
    fn homogeneous_round_trip() {
        let frame = Frame3::new(
            Matrix::from_rows([
                [1.0, 2.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.5, 0.0, 3.0],
            ]),
            V3::new(-1.0, 0.0, 2.0),
        );
        let m = frame.to_homogeneous();
        assert_eq!(m.get_row(4), Matrix::from_rows([[0.0, 0.0, 0.0, 1.0]]));
        assert_eq!(Frame3::from_homogeneous(&m), frame);

        // the homogeneous transform agrees with project
        let v = V3::new(2.0, -1.0, 1.0);
        assert_eq!(&m * v.extend(1.0), frame.project(&v).extend(1.0));
    }
}
