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

//! Small fixed-size matrix types, compatible with `V2`/`V3`.
//!
//! This library primarily uses a row-based formalism; matrices are conceptually
//! understood to be containers of row-vectors.

use std::ops::Add;
use num_traits::Num;

use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    [{M2 V2 2} {M3 V3 3}]
    impl_m_methods!($Mn:ident $Vn:ident $n:tt) => {
        impl<X> $Mn<$Vn<X>> {
            /// Construct a matrix from a function on indices.
            #[inline]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { $Mn(std::array::from_fn(|r| $Vn::from_fn(|c| f(r, c)))) }

            /// Cast into a plain `[[X; n]; n]`.
            #[inline]
            pub fn into_array(self) -> [[X; $n]; $n]
            { self.0.map($Vn::into_array) }
        }

        impl<X: Copy> $Mn<$Vn<X>> {
            /// Matrix transpose.
            #[inline]
            pub fn t(&self) -> Self
            { Self::from_fn(|r, c| self[c][r]) }

            /// Get a column as a vector.
            #[inline]
            pub fn col(&self, c: usize) -> $Vn<X>
            { $Vn::from_fn(|r| self[r][c]) }
        }

        impl<X: Num + Copy> $Mn<$Vn<X>> {
            /// Construct the identity matrix.
            #[inline(always)]
            pub fn eye() -> Self
            { Self::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

            /// Construct the zero matrix.
            #[inline(always)]
            pub fn zero() -> Self
            { Self::from_fn(|_, _| X::zero()) }

            /// Matrix determinant.
            #[inline(always)]
            pub fn det(&self) -> X
            { Det::det(self) }
        }

        impl<X: Num + Copy> Add<$Mn<$Vn<X>>> for $Mn<$Vn<X>> {
            type Output = Self;

            #[inline(always)]
            fn add(self, other: Self) -> Self { &self + &other }
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------

/// Implementation detail of the inherent method `{M22,M33}::det`.
trait Det {
    type Output;

    fn det(&self) -> Self::Output;
}

impl<X: Num + Copy> Det for M22<X> {
    type Output = X;

    #[inline]
    fn det(&self) -> X {
        let [[a, b], [c, d]] = self.into_array();
        a * d - b * c
    }
}

impl<X: Num + Copy> Det for M33<X> {
    type Output = X;

    fn det(&self) -> X {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.into_array();

        X::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }
}

// ---------------------------------------------------------------------------
