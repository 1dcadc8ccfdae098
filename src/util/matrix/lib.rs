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

//! Matrices whose shape is only known at runtime.
//!
//! Everything here works on flat row-major buffers together with explicit
//! row and column counts. [`Matrix`] is the owned, shape-carrying form;
//! the free functions in [`products`] are the general-dimension kernels
//! that accept bare slices, for callers that keep their own storage.

#[cfg(test)]
#[macro_use]
extern crate orbis_assert_close;

pub use self::error::{MatrixError, MatrixResult};
pub use self::matrix::Matrix;
pub use self::products::{Scalar, mtxmg, mtxmg_into, mtxmg_overwrite_m1, mtxmg_overwrite_m2};
pub use self::products::{mxmg, mxmg_into, mxmg_overwrite_m1, mxmg_overwrite_m2};
pub use self::products::{mxmtg, mxmtg_into, mxmtg_overwrite_m1, mxmtg_overwrite_m2};
pub use self::products::{xposeg, xposeg_into, xposeg_in_place};

mod error;
mod matrix;
pub mod products;
