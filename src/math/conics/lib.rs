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

//! Ellipses in 3-space.
//!
//! An ellipse is often handed to us as a center plus a pair of *generating
//! vectors* `v1`, `v2`, describing the set `{center + cos θ v1 + sin θ v2}`.
//! Any two conjugate semi-diameters generate the same ellipse, so to say
//! anything useful about its shape we first recover the semi-axes.

#[cfg(test)]
#[macro_use]
extern crate orbis_assert_close;

pub use self::diag::{diags2, Diagonalization2};
pub use self::ellipse::{saelgv, Ellipse};

mod diag;
mod ellipse;
