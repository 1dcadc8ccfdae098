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

use std::ops::{Deref, DerefMut};
use std::fmt;

/// Declares a newtype around a fixed-size array.
///
/// The newtype dereferences to its array, which provides indexing,
/// `iter()`, and destructuring through `.0`.
macro_rules! array_newtype {
    ($(#[$meta:meta])* $Name:ident<$T:ident $(= $Default:ty)*>, $n:tt) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $Name<$T $(= $Default)*>(pub [$T; $n]);

        impl<$T> Deref for $Name<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &[$T; $n]
            { &self.0 }
        }

        impl<$T> DerefMut for $Name<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut [$T; $n]
            { &mut self.0 }
        }

        // printed as the bare array, so that `{:?}` of a V3 or M33 reads as
        // nested lists in test failures and logs
        impl<$T: fmt::Debug> fmt::Debug for $Name<$T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    };
}

array_newtype!(
    /// Vector in the plane, used for the 2x2 eigenproblems of `orbis-conics`.
    V2<X = f64>, 2
);
array_newtype!(
    /// Vector in 3-space.
    V3<X = f64>, 3
);
array_newtype!(
    /// Matrix made of two rows of type `V`.
    M2<V>, 2
);
array_newtype!(
    /// Matrix made of three rows of type `V`.
    M3<V>, 3
);

/// 2x2 matrix; `m[r][c]` is row `r`, column `c`.
pub type M22<X = f64> = M2<V2<X>>;
/// 3x3 matrix; `m[r][c]` is row `r`, column `c`.
pub type M33<X = f64> = M3<V3<X>>;
