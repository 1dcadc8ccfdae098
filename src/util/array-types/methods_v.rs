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

use num_traits::{Float, Num, Zero};

use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

gen_each!{
    [{V2 2} {V3 3}]
    impl_v_methods!($Vn:ident $n:tt) => {
        impl<X> $Vn<X> {
            /// Construct a fixed-size vector from a function on indices.
            #[inline]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn(std::array::from_fn(f)) }

            /// Cast into a plain array.
            #[inline(always)]
            pub fn into_array(self) -> [X; $n]
            { self.0 }
        }

        impl<X: Zero + Copy> $Vn<X> {
            /// Get a zero vector.
            #[inline(always)]
            pub fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            /// Test whether every element is exactly zero.
            #[inline]
            pub fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }

        impl<X: Num + Copy> $Vn<X> {
            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
            #[inline]
            pub fn dot(&self, other: &Self) -> X
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> X
            { self.dot(self) }
        }

        impl<X: Float> $Vn<X> {
            /// Get the vector's magnitude.
            #[inline(always)]
            pub fn norm(&self) -> X
            { self.sqnorm().sqrt() }
        }
    }
}

impl<X: Num + Copy> V3<X> {
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Inner product of vectors.
///
/// This is basically just `{V2,V3}::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<X: Num + Copy>(a: &V3<X>, b: &V3<X>) -> X
{ a.dot(b) }

/// Linear combination `a * u + b * v`.
///
/// Each component is computed as `a * u[k] + b * v[k]`, so the result does
/// not depend on how the two products happen to round when formed separately.
#[inline]
pub fn lin_comb<X: Num + Copy>(a: X, u: &V3<X>, b: X, v: &V3<X>) -> V3<X>
{ V3::from_fn(|k| a * u[k] + b * v[k]) }

// -------------------------- END PUBLIC API ---------------------------------
