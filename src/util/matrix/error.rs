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

pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors from the general-dimension matrix routines.
///
/// No routine writes to its output when it returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Scratch space for the result could not be obtained.
    #[error("an attempt to create a temporary {rows}x{cols} matrix failed")]
    AllocationFailure { rows: usize, cols: usize },

    /// A buffer is too short for the dimensions it was given with.
    #[error("`{name}` has {actual} elements, but its dimensions call for {expected}")]
    ShapeMismatch { name: &'static str, expected: usize, actual: usize },

    /// The operands of a [`crate::Matrix`] product do not fit together.
    #[error("cannot compute {op} of a {left:?} matrix and a {right:?} matrix")]
    IncompatibleShapes { op: &'static str, left: (usize, usize), right: (usize, usize) },

    /// Rows supplied to [`crate::Matrix::try_from_rows`] differ in length.
    #[error("row {index} has {actual} elements, but the rows before it have {expected}")]
    RaggedRows { index: usize, expected: usize, actual: usize },
}

impl MatrixError {
    pub(crate) fn check_len(name: &'static str, (rows, cols): (usize, usize), actual: usize) -> MatrixResult<()> {
        match rows.checked_mul(cols) {
            Some(expected) if expected <= actual => Ok(()),
            expected => Err(MatrixError::ShapeMismatch {
                name,
                expected: expected.unwrap_or(usize::max_value()),
                actual,
            }),
        }
    }
}
