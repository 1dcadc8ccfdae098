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

//! Small fixed-size vector and matrix types.
//!
//! Matrices use a row-based formalism; an `M33` is a container of three row
//! vectors, and `m[r][c]` is the element at row `r` and column `c`.

#[cfg(test)]
#[macro_use]
extern crate orbis_assert_close;

#[macro_use]
mod macros;
mod types;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::*;
pub use crate::methods_v::{dot, lin_comb};
