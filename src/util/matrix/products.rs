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

//! General-dimension matrix products on flat row-major buffers.
//!
//! Every product is available in four forms:
//!
//! * `name(m1, m2, ...)` returns a freshly allocated [`Matrix`].
//! * `name_into(m1, m2, ..., mout)` writes into a caller buffer.
//! * `name_overwrite_m1` and `name_overwrite_m2` write the result over the
//!   leading elements of one of the inputs.
//!
//! The last two forms are how these routines express an output that aliases
//! an input. All forms compute the complete result into a scratch buffer
//! before anything is written, so the overlap pattern never matters.
//!
//! The summed dimension of each product is signed. A negative value is not
//! an error; it means the sum is empty, and the result is the zero matrix.
//!
//! Dimensions must agree with the buffer lengths: every operand must hold at
//! least `rows * cols` elements. Trailing elements are ignored (and left
//! untouched, in the case of the output).

use std::ops::{Add, Mul};

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::{Matrix, MatrixError, MatrixResult};

/// Element types supported by the general-dimension products.
pub trait Scalar: Copy + Zero + Add<Output=Self> + Mul<Output=Self> {}

impl<T> Scalar for T where T: Copy + Zero + Add<Output=T> + Mul<Output=T> {}

// ---------------------------------------------------------------------------

/// Which operand (if any) enters a product transposed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Form {
    /// `m1ᵗ m2`
    TransposeLeft,
    /// `m1 m2`
    Plain,
    /// `m1 m2ᵗ`
    TransposeRight,
}

/// The dimensions of a product `mout (rows x cols) = Σ_k ...`.
#[derive(Debug, Copy, Clone)]
struct Product {
    form: Form,
    rows: usize,
    inner: usize,
    cols: usize,
}

impl Product {
    fn new(form: Form, rows: usize, inner: isize, cols: usize) -> Self {
        if inner < 0 {
            trace!("negative summed dimension ({}) in {:?} product; result is zero", inner, form);
        }
        let inner = if inner < 0 { 0 } else { inner as usize };
        Product { form, rows, inner, cols }
    }

    fn m1_dims(&self) -> (usize, usize) {
        match self.form {
            Form::TransposeLeft => (self.inner, self.rows),
            Form::Plain | Form::TransposeRight => (self.rows, self.inner),
        }
    }

    fn m2_dims(&self) -> (usize, usize) {
        match self.form {
            Form::TransposeLeft | Form::Plain => (self.inner, self.cols),
            Form::TransposeRight => (self.cols, self.inner),
        }
    }

    fn out_dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Compute the whole product into a fresh scratch buffer.
    fn evaluate<T: Scalar>(&self, m1: &[T], m2: &[T]) -> MatrixResult<Vec<T>> {
        MatrixError::check_len("m1", self.m1_dims(), m1.len())?;
        MatrixError::check_len("m2", self.m2_dims(), m2.len())?;

        let mut tmp = scratch(self.out_dims())?;

        // offsets of element k of the vectors dotted together for (row, col)
        let (m1_width, m2_width) = (self.m1_dims().1, self.m2_dims().1);
        let m1_index = |k: usize, row: usize| match self.form {
            Form::TransposeLeft => k * m1_width + row,
            Form::Plain | Form::TransposeRight => row * m1_width + k,
        };
        let m2_index = |k: usize, col: usize| match self.form {
            Form::TransposeLeft | Form::Plain => k * m2_width + col,
            Form::TransposeRight => col * m2_width + k,
        };

        for (row, col) in (0..self.rows).cartesian_product(0..self.cols) {
            let mut inner_product = T::zero();
            for k in 0..self.inner {
                inner_product = inner_product + m1[m1_index(k, row)] * m2[m2_index(k, col)];
            }
            tmp[row * self.cols + col] = inner_product;
        }
        Ok(tmp)
    }

    fn into_matrix<T: Scalar>(self, m1: &[T], m2: &[T]) -> MatrixResult<Matrix<T>> {
        let data = self.evaluate(m1, m2)?;
        Ok(Matrix::from_row_major_data(self.out_dims(), data))
    }

    fn write_into<T: Scalar>(self, m1: &[T], m2: &[T], mout: &mut [T]) -> MatrixResult<()> {
        MatrixError::check_len("mout", self.out_dims(), mout.len())?;
        let data = self.evaluate(m1, m2)?;
        mout[..data.len()].copy_from_slice(&data);
        Ok(())
    }

    fn write_over_m1<T: Scalar>(self, m1: &mut [T], m2: &[T]) -> MatrixResult<()> {
        MatrixError::check_len("m1 (as output)", self.out_dims(), m1.len())?;
        let data = self.evaluate(m1, m2)?;
        m1[..data.len()].copy_from_slice(&data);
        Ok(())
    }

    fn write_over_m2<T: Scalar>(self, m1: &[T], m2: &mut [T]) -> MatrixResult<()> {
        MatrixError::check_len("m2 (as output)", self.out_dims(), m2.len())?;
        let data = self.evaluate(m1, m2)?;
        m2[..data.len()].copy_from_slice(&data);
        Ok(())
    }
}

/// Acquire a zeroed `rows x cols` buffer, reporting failure instead of aborting.
fn scratch<T: Scalar>((rows, cols): (usize, usize)) -> MatrixResult<Vec<T>> {
    let failure = || {
        debug!("could not allocate a temporary {}x{} matrix", rows, cols);
        MatrixError::AllocationFailure { rows, cols }
    };
    let len = rows.checked_mul(cols).ok_or_else(failure)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| failure())?;
    buf.resize(len, T::zero());
    Ok(buf)
}

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

macro_rules! general_product {
    (
        $(#[$doc:meta])*
        form: $form:expr,
        dims: ($rows:ident, $inner:ident, $cols:ident),
        fns: [$name:ident, $name_into:ident, $name_m1:ident, $name_m2:ident],
    ) => {
        $(#[$doc])*
        pub fn $name<T: Scalar>(
            m1: &[T],
            m2: &[T],
            $rows: usize,
            $inner: isize,
            $cols: usize,
        ) -> MatrixResult<Matrix<T>> {
            Product::new($form, $rows, $inner, $cols).into_matrix(m1, m2)
        }

        #[doc = concat!("Like [`", stringify!($name), "`], writing the result into `mout`.")]
        pub fn $name_into<T: Scalar>(
            m1: &[T],
            m2: &[T],
            $rows: usize,
            $inner: isize,
            $cols: usize,
            mout: &mut [T],
        ) -> MatrixResult<()> {
            Product::new($form, $rows, $inner, $cols).write_into(m1, m2, mout)
        }

        #[doc = concat!("Like [`", stringify!($name), "`], writing the result over `m1`.")]
        pub fn $name_m1<T: Scalar>(
            m1: &mut [T],
            m2: &[T],
            $rows: usize,
            $inner: isize,
            $cols: usize,
        ) -> MatrixResult<()> {
            Product::new($form, $rows, $inner, $cols).write_over_m1(m1, m2)
        }

        #[doc = concat!("Like [`", stringify!($name), "`], writing the result over `m2`.")]
        pub fn $name_m2<T: Scalar>(
            m1: &[T],
            m2: &mut [T],
            $rows: usize,
            $inner: isize,
            $cols: usize,
        ) -> MatrixResult<()> {
            Product::new($form, $rows, $inner, $cols).write_over_m2(m1, m2)
        }
    };
}

general_product!{
    /// Multiply the transpose of a matrix with another matrix, both of arbitrary size.
    ///
    /// `m1` is `nr1r2 x nc1` and `m2` is `nr1r2 x nc2`. The output is the
    /// `nc1 x nc2` matrix
    ///
    /// ```text
    /// mout[i][j] = Σ_{k < nr1r2} m1[k][i] * m2[k][j]
    /// ```
    ///
    /// with the sum accumulated in order of increasing `k`.
    /// If `nr1r2 < 0`, the output is all zeros.
    ///
    /// # Errors
    ///
    /// [`MatrixError::AllocationFailure`] if the temporary result cannot be
    /// allocated, [`MatrixError::ShapeMismatch`] if a buffer is too short.
    form: Form::TransposeLeft,
    dims: (nc1, nr1r2, nc2),
    fns: [mtxmg, mtxmg_into, mtxmg_overwrite_m1, mtxmg_overwrite_m2],
}

general_product!{
    /// Multiply two matrices of arbitrary size.
    ///
    /// `m1` is `nr1 x nc1r2` and `m2` is `nc1r2 x nc2`; the output is
    /// `nr1 x nc2`, with `mout[i][j] = Σ_k m1[i][k] * m2[k][j]`.
    /// If `nc1r2 < 0`, the output is all zeros.
    ///
    /// # Errors
    ///
    /// As for [`mtxmg`].
    form: Form::Plain,
    dims: (nr1, nc1r2, nc2),
    fns: [mxmg, mxmg_into, mxmg_overwrite_m1, mxmg_overwrite_m2],
}

general_product!{
    /// Multiply a matrix by the transpose of another, both of arbitrary size.
    ///
    /// `m1` is `nr1 x nc1c2` and `m2` is `nr2 x nc1c2`; the output is
    /// `nr1 x nr2`, with `mout[i][j] = Σ_k m1[i][k] * m2[j][k]`.
    /// If `nc1c2 < 0`, the output is all zeros.
    ///
    /// # Errors
    ///
    /// As for [`mtxmg`].
    form: Form::TransposeRight,
    dims: (nr1, nc1c2, nr2),
    fns: [mxmtg, mxmtg_into, mxmtg_overwrite_m1, mxmtg_overwrite_m2],
}

/// Transpose a `nrow x ncol` matrix of arbitrary size.
pub fn xposeg<T: Copy>(m: &[T], nrow: usize, ncol: usize) -> MatrixResult<Matrix<T>> {
    let data = transpose_scratch(m, nrow, ncol)?;
    Ok(Matrix::from_row_major_data((ncol, nrow), data))
}

/// Like [`xposeg`], writing the `ncol x nrow` result into `mout`.
pub fn xposeg_into<T: Copy>(m: &[T], nrow: usize, ncol: usize, mout: &mut [T]) -> MatrixResult<()> {
    MatrixError::check_len("mout", (ncol, nrow), mout.len())?;
    let data = transpose_scratch(m, nrow, ncol)?;
    mout[..data.len()].copy_from_slice(&data);
    Ok(())
}

/// Like [`xposeg`], writing the result over `m`.
///
/// Afterwards, the leading `ncol * nrow` elements of `m` hold the
/// transpose in row-major order.
pub fn xposeg_in_place<T: Copy>(m: &mut [T], nrow: usize, ncol: usize) -> MatrixResult<()> {
    let data = transpose_scratch(m, nrow, ncol)?;
    m[..data.len()].copy_from_slice(&data);
    Ok(())
}

fn transpose_scratch<T: Copy>(m: &[T], nrow: usize, ncol: usize) -> MatrixResult<Vec<T>> {
    MatrixError::check_len("m", (nrow, ncol), m.len())?;
    let len = nrow * ncol; // checked above

    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| {
        debug!("could not allocate a temporary {}x{} matrix", ncol, nrow);
        MatrixError::AllocationFailure { rows: ncol, cols: nrow }
    })?;
    buf.extend((0..ncol).cartesian_product(0..nrow).map(|(c, r)| m[r * ncol + c]));
    Ok(buf)
}

// -------------------------- END PUBLIC API ---------------------------------
