/* ************************************************************************ **
** This file is part of orbis, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of orbis is provided under this permissive         **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

//! Tolerant comparisons of floating point data, for use in tests.
//!
//! ```
//! # #[macro_use] extern crate orbis_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-12, [0.1 + 0.2, 1.0], [0.3, 1.0]);
//! # }
//! ```

use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs;
            let mut rel;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

/// Test whether two scalars are equal within tolerance.
///
/// Either tolerance is sufficient on its own.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Implementation from Python 3.5.
    // https://hg.python.org/cpython/file/tip/Modules/mathmodule.c#l1993
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T,
}

#[derive(Debug, thiserror::Error)]
#[error("failed at:\n  left: {left:?}\n right: {right:?}\n   tol: {tol:?}")]
pub struct CheckCloseError<T: fmt::Debug = f64> {
    pub left: T,
    pub right: T,
    pub tol: Tolerances<T>,
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { left: *self, right: *other, tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len(), "length mismatch in assert_close");
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
    }

    #[test]
    fn nested_arrays() {
        assert_close!(abs=1e-12, [[1.0, 0.0], [0.0, 1.0]], [[1.0 + 1e-14, 0.0], [-1e-14, 1.0]]);
        assert_close!(abs=1e-12, vec![1.0, 2.0], vec![1.0, 2.0]);
    }

    #[test]
    fn bad_parse_regression() {
        #[derive(Debug)] struct S;
        impl S { fn x(self) -> S { self } }
        impl crate::CheckClose for S {
            type Scalar = f64;
            fn check_close(&self, _: &S, _: crate::Tolerances) -> Result<(), crate::CheckCloseError<Self::Scalar>> { Ok(()) }
        }
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        debug_assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
            "{}", "hello",
        );
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
