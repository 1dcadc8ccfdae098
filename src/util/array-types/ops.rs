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

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use num_traits::Num;

use crate::types::*;

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.

// ---------------------------------------------------------------------------
// vector-vector ops

gen_each!{
    [{V2} {V3}]
    impl_v_add_sub!($Vn:ident) => {
        impl<'a, 'b, X: Num + Copy> Add<&'b $Vn<X>> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, other: &'b $Vn<X>) -> Self::Output
            { $Vn::from_fn(|k| self[k] + other[k]) }
        }

        impl<'a, 'b, X: Num + Copy> Sub<&'b $Vn<X>> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, other: &'b $Vn<X>) -> Self::Output
            { $Vn::from_fn(|k| self[k] - other[k]) }
        }

        impl<X: Num + Copy> Add<$Vn<X>> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn add(self, other: $Vn<X>) -> Self::Output { &self + &other }
        }

        impl<X: Num + Copy> Sub<$Vn<X>> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn sub(self, other: $Vn<X>) -> Self::Output { &self - &other }
        }

        impl<'b, X: Num + Copy> Add<&'b $Vn<X>> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn add(self, other: &'b $Vn<X>) -> Self::Output { &self + other }
        }

        impl<'b, X: Num + Copy> Sub<&'b $Vn<X>> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn sub(self, other: &'b $Vn<X>) -> Self::Output { &self - other }
        }

        impl<'a, X: Num + Copy> Add<$Vn<X>> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn add(self, other: $Vn<X>) -> Self::Output { self + &other }
        }

        impl<'a, X: Num + Copy> Sub<$Vn<X>> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn sub(self, other: $Vn<X>) -> Self::Output { self - &other }
        }

        impl<'b, X: Num + Copy> AddAssign<&'b $Vn<X>> for $Vn<X> {
            #[inline]
            fn add_assign(&mut self, other: &'b $Vn<X>) { *self = &*self + other; }
        }

        impl<X: Num + Copy> AddAssign<$Vn<X>> for $Vn<X> {
            #[inline]
            fn add_assign(&mut self, other: $Vn<X>) { *self += &other; }
        }

        impl<'b, X: Num + Copy> SubAssign<&'b $Vn<X>> for $Vn<X> {
            #[inline]
            fn sub_assign(&mut self, other: &'b $Vn<X>) { *self = &*self - other; }
        }

        impl<X: Num + Copy> SubAssign<$Vn<X>> for $Vn<X> {
            #[inline]
            fn sub_assign(&mut self, other: $Vn<X>) { *self -= &other; }
        }

        // -vector
        impl<'a, X: Copy + Neg<Output=X>> Neg for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { $Vn::from_fn(|k| -self[k]) }
        }

        impl<X: Copy + Neg<Output=X>> Neg for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn neg(self) -> Self::Output { -&self }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

gen_each!{
    [{V2} {V3}]
    impl_v_scalar_ops!($Vn:ident) => {
        // vector * scalar
        impl<'a, X: Num + Copy> Mul<X> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { $Vn::from_fn(|k| self[k] * scalar) }
        }

        impl<X: Num + Copy> Mul<X> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn mul(self, scalar: X) -> Self::Output { &self * scalar }
        }

        // vector / scalar
        impl<'a, X: Num + Copy> Div<X> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { $Vn::from_fn(|k| self[k] / scalar) }
        }

        impl<X: Num + Copy> Div<X> for $Vn<X> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn div(self, scalar: X) -> Self::Output { &self / scalar }
        }

        impl<X: Num + Copy> MulAssign<X> for $Vn<X> {
            #[inline]
            fn mul_assign(&mut self, scalar: X) { *self = &*self * scalar; }
        }

        impl<X: Num + Copy> DivAssign<X> for $Vn<X> {
            #[inline]
            fn div_assign(&mut self, scalar: X) { *self = &*self / scalar; }
        }

        // scalar * vector
        //
        // the orphan rules prevent a generic impl "for X", so this
        // is limited to the primitive floats
        impl<'a> Mul<&'a $Vn<f64>> for f64 {
            type Output = $Vn<f64>;

            #[inline(always)]
            fn mul(self, vector: &'a $Vn<f64>) -> Self::Output { vector * self }
        }

        impl Mul<$Vn<f64>> for f64 {
            type Output = $Vn<f64>;

            #[inline(always)]
            fn mul(self, vector: $Vn<f64>) -> Self::Output { vector * self }
        }

        impl<'a> Mul<&'a $Vn<f32>> for f32 {
            type Output = $Vn<f32>;

            #[inline(always)]
            fn mul(self, vector: &'a $Vn<f32>) -> Self::Output { vector * self }
        }

        impl Mul<$Vn<f32>> for f32 {
            type Output = $Vn<f32>;

            #[inline(always)]
            fn mul(self, vector: $Vn<f32>) -> Self::Output { vector * self }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix ops

gen_each!{
    [{M2 V2 2} {M3 V3 3}]
    impl_m_ops!($Mn:ident $Vn:ident $n:tt) => {
        // matrix * column vector
        impl<'a, 'b, X: Num + Copy> Mul<&'b $Vn<X>> for &'a $Mn<$Vn<X>> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, vector: &'b $Vn<X>) -> Self::Output
            { $Vn::from_fn(|r| $Vn::dot(&self[r], vector)) }
        }

        impl<X: Num + Copy> Mul<$Vn<X>> for $Mn<$Vn<X>> {
            type Output = $Vn<X>;

            #[inline(always)]
            fn mul(self, vector: $Vn<X>) -> Self::Output { &self * &vector }
        }

        // row vector * matrix
        impl<'a, 'b, X: Num + Copy> Mul<&'b $Mn<$Vn<X>>> for &'a $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, matrix: &'b $Mn<$Vn<X>>) -> Self::Output
            {
                $Vn::from_fn(|c| {
                    (1..$n).fold(self[0] * matrix[0][c], |acc, k| acc + self[k] * matrix[k][c])
                })
            }
        }

        // matrix * matrix
        impl<'a, 'b, X: Num + Copy> Mul<&'b $Mn<$Vn<X>>> for &'a $Mn<$Vn<X>> {
            type Output = $Mn<$Vn<X>>;

            #[inline]
            fn mul(self, other: &'b $Mn<$Vn<X>>) -> Self::Output
            { $Mn::from_fn(|r, c| (1..$n).fold(self[r][0] * other[0][c], |acc, k| acc + self[r][k] * other[k][c])) }
        }

        impl<X: Num + Copy> Mul<$Mn<$Vn<X>>> for $Mn<$Vn<X>> {
            type Output = $Mn<$Vn<X>>;

            #[inline(always)]
            fn mul(self, other: $Mn<$Vn<X>>) -> Self::Output { &self * &other }
        }

        // matrix * scalar
        impl<'a, X: Num + Copy> Mul<X> for &'a $Mn<$Vn<X>> {
            type Output = $Mn<$Vn<X>>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { $Mn::from_fn(|r, c| self[r][c] * scalar) }
        }

        // matrix + matrix
        impl<'a, 'b, X: Num + Copy> Add<&'b $Mn<$Vn<X>>> for &'a $Mn<$Vn<X>> {
            type Output = $Mn<$Vn<X>>;

            #[inline]
            fn add(self, other: &'b $Mn<$Vn<X>>) -> Self::Output
            { $Mn::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        // matrix - matrix
        impl<'a, 'b, X: Num + Copy> Sub<&'b $Mn<$Vn<X>>> for &'a $Mn<$Vn<X>> {
            type Output = $Mn<$Vn<X>>;

            #[inline]
            fn sub(self, other: &'b $Mn<$Vn<X>>) -> Self::Output
            { $Mn::from_fn(|r, c| self[r][c] - other[r][c]) }
        }
    }
}
